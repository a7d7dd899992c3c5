use crate::types::PointSequence;

/// A closed-form curve that can be sampled into a point sequence
pub trait Shape {
    /// Sample the shape into exactly `num_points` points.
    ///
    /// Implementations panic when `num_points < 2`.
    fn sample(&self, num_points: usize) -> PointSequence;

    /// Short name, used in logs and render filenames
    fn name(&self) -> &str {
        "shape"
    }

    /// Component curves the shape is built from, for previews only
    fn guides(&self, _num_points: usize) -> Vec<PointSequence> {
        Vec::new()
    }

    /// Whether the last sample is forced back onto the first
    fn closes_loop(&self) -> bool {
        false
    }
}
