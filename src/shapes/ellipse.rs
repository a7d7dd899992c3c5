use glam::DVec2;

use super::full_turn_angle;
use crate::core::sample_curve;
use crate::traits::Shape;
use crate::types::PointSequence;

/// Axis-aligned ellipse with semi-axes `a` (x) and `b` (y)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ellipse {
    pub center: DVec2,
    pub a: f64,
    pub b: f64,
}

impl Ellipse {
    pub const fn new(center: DVec2, a: f64, b: f64) -> Self {
        Self { center, a, b }
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::new(DVec2::ZERO, 150.0, 80.0)
    }
}

impl Shape for Ellipse {
    fn sample(&self, num_points: usize) -> PointSequence {
        sample_curve(num_points, |i, n| {
            let angle = full_turn_angle(i, n);
            self.center + DVec2::new(self.a * angle.cos(), self.b * angle.sin()).trunc()
        })
    }

    fn name(&self) -> &str {
        "ellipse"
    }
}
