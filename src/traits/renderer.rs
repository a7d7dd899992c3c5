use std::path::PathBuf;

use crate::types::PointSequence;

/// Optional preview output for a sampled sequence
pub trait SequenceRenderer {
    /// Render `sequence` over optional construction `guides` and return
    /// where the result was written
    fn render(
        &self,
        name: &str,
        sequence: &PointSequence,
        guides: &[PointSequence],
    ) -> anyhow::Result<PathBuf>;
}
