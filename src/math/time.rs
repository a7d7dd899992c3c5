/// Normalized time of sample `index` out of `total`: `index / (total - 1)`,
/// with the first sample pinned to exactly zero.
pub fn normalized_time(index: usize, total: usize) -> f64 {
    if index == 0 {
        0.0
    } else {
        index as f64 / (total - 1) as f64
    }
}

/// Position of `index` inside a run of `len` samples, in `[0, 1]`.
/// A run of one sample sits at 0.
pub fn segment_fraction(index: usize, len: usize) -> f64 {
    if len <= 1 {
        0.0
    } else {
        index as f64 / (len - 1) as f64
    }
}
