mod color;
mod segments;
mod superformula;
mod time;

pub use color::hsv_to_rgb;
pub use segments::SegmentPlan;
pub use superformula::Superformula;
pub use time::{normalized_time, segment_fraction};
