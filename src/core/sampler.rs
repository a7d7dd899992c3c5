//! The curve sampler: turns a position function and a sample count into a
//! time-normalized [`PointSequence`].

use glam::DVec2;

use crate::math::{normalized_time, segment_fraction, SegmentPlan};
use crate::types::{Point, PointSequence};

/// Smallest sample count that can be normalized to `[0, 1]`
pub const MIN_POINTS: usize = 2;

fn check_count(num_points: usize) {
    assert!(
        num_points >= MIN_POINTS,
        "a point sequence needs at least {MIN_POINTS} samples, got {num_points}"
    );
}

/// Sample a single continuous curve.
///
/// `position(i, n)` returns the continuous position of sample `i` of `n`;
/// the sampler truncates it and attaches the normalized time `i / (n - 1)`.
///
/// # Panics
/// If `num_points < 2`.
pub fn sample_curve<F>(num_points: usize, position: F) -> PointSequence
where
    F: Fn(usize, usize) -> DVec2,
{
    check_count(num_points);

    let points = (0..num_points)
        .map(|i| Point::from_continuous(normalized_time(i, num_points), position(i, num_points)))
        .collect();

    PointSequence::new(points)
}

/// Sample a path made of consecutive segments.
///
/// `position(k, s)` receives the segment index and the segment-local
/// fraction `s` in `[0, 1]`. The emitted time uses the global index of the
/// point over the plan's total.
///
/// # Panics
/// If the plan holds fewer than 2 points.
pub fn sample_segments<F>(plan: &SegmentPlan, position: F) -> PointSequence
where
    F: Fn(usize, f64) -> DVec2,
{
    let total = plan.total();
    check_count(total);

    let mut points = Vec::with_capacity(total);
    for (k, &len) in plan.lengths().iter().enumerate() {
        let offset = plan.offset(k);
        points.extend((0..len).map(|local| {
            let time = normalized_time(offset + local, total);
            Point::from_continuous(time, position(k, segment_fraction(local, len)))
        }));
    }

    PointSequence::new(points)
}
