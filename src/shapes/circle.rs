use glam::DVec2;

use super::{full_turn_angle, polar};
use crate::core::sample_curve;
use crate::traits::Shape;
use crate::types::PointSequence;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

impl Circle {
    pub const fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(DVec2::ZERO, 100.0)
    }
}

impl Shape for Circle {
    fn sample(&self, num_points: usize) -> PointSequence {
        sample_curve(num_points, |i, n| {
            polar(self.center, self.radius, full_turn_angle(i, n))
        })
    }

    fn name(&self) -> &str {
        "circle"
    }
}

/// Circle whose radius oscillates: `r = a + b·sin(freq·θ)`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SinusoidalCircle {
    pub center: DVec2,
    pub a: f64,
    pub b: f64,
    pub freq: f64,
}

impl SinusoidalCircle {
    pub const fn new(center: DVec2, a: f64, b: f64, freq: f64) -> Self {
        Self { center, a, b, freq }
    }
}

impl Default for SinusoidalCircle {
    fn default() -> Self {
        Self::new(DVec2::ZERO, 100.0, 20.0, 3.0)
    }
}

impl Shape for SinusoidalCircle {
    fn sample(&self, num_points: usize) -> PointSequence {
        sample_curve(num_points, |i, n| {
            let angle = full_turn_angle(i, n);
            let r = self.a + self.b * (self.freq * angle).sin();
            polar(self.center, r, angle)
        })
    }

    fn name(&self) -> &str {
        "circle_sin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn test_circle_quarter_turns() {
        let seq = Circle::new(DVec2::ZERO, 100.0).sample(4);
        assert_eq!(
            seq.points(),
            &[
                Point::new(0.0, 100, 0),
                Point::new(1.0 / 3.0, 0, 100),
                Point::new(2.0 / 3.0, -100, 0),
                Point::new(1.0, 0, -100),
            ]
        );
    }

    #[test]
    fn test_circle_offset_center() {
        let seq = Circle::new(DVec2::new(10.0, -20.0), 50.0).sample(4);
        assert_eq!(seq.points()[0].coords(), (60, -20));
        assert_eq!(seq.points()[2].coords(), (-40, -20));
    }

    #[test]
    fn test_sinusoidal_zero_amplitude_is_circle() {
        let plain = Circle::new(DVec2::ZERO, 100.0).sample(64);
        let wavy = SinusoidalCircle::new(DVec2::ZERO, 100.0, 0.0, 3.0).sample(64);
        assert_eq!(plain, wavy);
    }

    #[test]
    fn test_sinusoidal_radius_stays_in_band() {
        let shape = SinusoidalCircle::default();
        for p in shape.sample(500).iter() {
            let r = ((p.x * p.x + p.y * p.y) as f64).sqrt();
            assert!(r <= 121.0 && r >= 78.0, "radius {r} out of band");
        }
    }
}
