pub mod sampler;

pub use sampler::{sample_curve, sample_segments, MIN_POINTS};
