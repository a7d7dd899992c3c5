use std::f64::consts::{PI, TAU};

use glam::DVec2;

use crate::core::sample_segments;
use crate::math::SegmentPlan;
use crate::traits::Shape;
use crate::types::PointSequence;

/// A shrinking, perturbed spiral crossed by a fan of small circles.
///
/// The main spiral takes 70% of the points; the rest are shared evenly by
/// `complexity - 1` cross circles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurlyMaze {
    pub center: DVec2,
    pub size: f64,
    pub complexity: usize,
    pub density: f64,
}

impl CurlyMaze {
    pub const MAIN_PATH_SHARE: f64 = 0.7;

    pub const fn new(center: DVec2, size: f64, complexity: usize, density: f64) -> Self {
        Self {
            center,
            size,
            complexity,
            density,
        }
    }

    /// Complexity used by the geometry; zero behaves like one
    fn turns(&self) -> usize {
        self.complexity.max(1)
    }

    fn cross_paths(&self) -> usize {
        self.turns() - 1
    }

    pub fn plan(&self, num_points: usize) -> SegmentPlan {
        let lead = (num_points as f64 * Self::MAIN_PATH_SHARE) as usize;
        SegmentPlan::with_lead(num_points, lead, self.cross_paths())
    }

    fn main_path(&self, s: f64) -> DVec2 {
        let sweep = self.turns() as f64 * TAU;
        let u = s * sweep;
        let radius = self.size * (1.0 - u / sweep);

        let curl = DVec2::new(
            (self.density * u).sin() * (u / 2.0).cos(),
            (self.density * u).cos() * (u / 3.0).sin(),
        ) * (radius / 3.0);

        DVec2::new(radius * u.cos(), radius * u.sin()) + curl + self.center
    }

    /// Cross circle `c` in `1..complexity`
    fn cross_path(&self, c: usize, s: f64) -> DVec2 {
        let n = self.turns() as f64;
        let angle = c as f64 * PI / n;
        let r = self.size * 0.3 * c as f64 / n;
        let hub = self.center + DVec2::new(angle.cos(), angle.sin()) * (self.size * 0.5);

        let u = s * TAU;
        DVec2::new(r * u.cos(), r * u.sin()) + hub
    }
}

impl Default for CurlyMaze {
    fn default() -> Self {
        Self::new(DVec2::ZERO, 200.0, 7, 0.8)
    }
}

impl Shape for CurlyMaze {
    fn sample(&self, num_points: usize) -> PointSequence {
        let plan = self.plan(num_points);
        log::debug!(
            "curly maze: {} main points, cross paths {:?}",
            plan.lengths()[0],
            &plan.lengths()[1..]
        );

        sample_segments(&plan, |k, s| match k {
            0 => self.main_path(s),
            c => self.cross_path(c, s),
        })
    }

    fn name(&self) -> &str {
        "curly_maze"
    }
}
