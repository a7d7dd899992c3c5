use glam::DVec2;

use super::polar;
use crate::core::sample_curve;
use crate::math::normalized_time;
use crate::traits::Shape;
use crate::types::PointSequence;

/// Angle swept after fraction `t` of `turns` full turns
fn swept_angle(t: f64, turns: f64) -> f64 {
    t * turns * std::f64::consts::TAU
}

/// Archimedean spiral `r = a + b·θ`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArchimedeanSpiral {
    pub center: DVec2,
    pub a: f64,
    pub b: f64,
    pub turns: f64,
}

impl ArchimedeanSpiral {
    pub const fn new(center: DVec2, a: f64, b: f64, turns: f64) -> Self {
        Self { center, a, b, turns }
    }
}

impl Default for ArchimedeanSpiral {
    fn default() -> Self {
        Self::new(DVec2::ZERO, 10.0, 1.0, 15.0)
    }
}

impl Shape for ArchimedeanSpiral {
    fn sample(&self, num_points: usize) -> PointSequence {
        sample_curve(num_points, |i, n| {
            let theta = swept_angle(normalized_time(i, n), self.turns);
            polar(self.center, self.a + self.b * theta, theta)
        })
    }

    fn name(&self) -> &str {
        "spiral"
    }
}

/// Logarithmic spiral `r = scale·e^(growth·θ)`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GoldenSpiral {
    pub center: DVec2,
    pub scale: f64,
    pub turns: f64,
    pub growth: f64,
}

impl GoldenSpiral {
    pub const DEFAULT_GROWTH: f64 = 0.17;

    pub const fn new(center: DVec2, scale: f64, turns: f64) -> Self {
        Self {
            center,
            scale,
            turns,
            growth: Self::DEFAULT_GROWTH,
        }
    }
}

impl Default for GoldenSpiral {
    fn default() -> Self {
        Self::new(DVec2::ZERO, 1.0, 10.0)
    }
}

impl Shape for GoldenSpiral {
    fn sample(&self, num_points: usize) -> PointSequence {
        sample_curve(num_points, |i, n| {
            let theta = swept_angle(normalized_time(i, n), self.turns);
            polar(self.center, self.scale * (self.growth * theta).exp(), theta)
        })
    }

    fn name(&self) -> &str {
        "golden_spiral"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archimedean_starts_at_a() {
        let seq = ArchimedeanSpiral::default().sample(100);
        assert_eq!(seq.points()[0].coords(), (10, 0));
    }

    #[test]
    fn test_archimedean_ends_after_whole_turns() {
        // θ_end = 2·2π, r = 10 + 4π ≈ 22.57
        let seq = ArchimedeanSpiral::new(DVec2::ZERO, 10.0, 1.0, 2.0).sample(101);
        let last = seq.last().unwrap();
        assert_eq!(last.coords(), (22, 0));
        assert_eq!(last.time, 1.0);
    }

    #[test]
    fn test_golden_spiral_grows() {
        let seq = GoldenSpiral::new(DVec2::ZERO, 10.0, 2.0).sample(9);
        let radius = |i: usize| {
            let p = seq.points()[i];
            ((p.x * p.x + p.y * p.y) as f64).sqrt()
        };
        assert!(radius(8) > radius(4));
        assert!(radius(4) > radius(0));
    }
}
