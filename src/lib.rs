pub mod cli;
pub mod core;
pub mod math;
pub mod render;
pub mod shapes;
pub mod traits;
pub mod transport;
pub mod types;

pub use crate::core::{sample_curve, sample_segments};
pub use traits::{SequenceRenderer, Shape};
pub use types::{Point, PointSequence};
