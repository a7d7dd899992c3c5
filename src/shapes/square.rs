use glam::DVec2;

use crate::core::sample_segments;
use crate::math::SegmentPlan;
use crate::traits::Shape;
use crate::types::PointSequence;

/// Axis-aligned square traced counter-clockwise from the bottom-left
/// corner: bottom, right, top, left.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Square {
    pub center: DVec2,
    pub side: f64,
}

impl Square {
    pub const SIDES: usize = 4;

    pub const fn new(center: DVec2, side: f64) -> Self {
        Self { center, side }
    }

    /// Start corner and travel direction of each side
    fn side_path(&self, k: usize) -> (DVec2, DVec2) {
        let h = self.side / 2.0;
        match k {
            0 => (DVec2::new(-h, -h), DVec2::X),
            1 => (DVec2::new(h, -h), DVec2::Y),
            2 => (DVec2::new(h, h), DVec2::NEG_X),
            _ => (DVec2::new(-h, h), DVec2::NEG_Y),
        }
    }
}

impl Default for Square {
    fn default() -> Self {
        Self::new(DVec2::ZERO, 200.0)
    }
}

impl Shape for Square {
    fn sample(&self, num_points: usize) -> PointSequence {
        let plan = SegmentPlan::even(num_points, Self::SIDES);
        sample_segments(&plan, |k, s| {
            let (start, dir) = self.side_path(k);
            self.center + start + dir * (s * self.side)
        })
    }

    fn name(&self) -> &str {
        "square"
    }
}
