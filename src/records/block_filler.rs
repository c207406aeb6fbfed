//! Block filler line.

use serde::Serialize;

/// A padding line of 94 "9" characters.
///
/// NACHA files are transmitted in 10-line physical blocks; file-level
/// aggregation appends fillers until the line count is a multiple of 10.
/// Purely a rendering artifact, not a business record.
#[derive(Debug, Clone, Serialize)]
pub struct BlockFiller;

impl BlockFiller {
    pub fn new() -> Self {
        BlockFiller
    }

    /// Renders the filler as a 94-character line of "9"s.
    pub fn render(&self) -> String {
        "9".repeat(super::RECORD_WIDTH)
    }
}

impl Default for BlockFiller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_94_nines() {
        let line = BlockFiller::new().render();
        assert_eq!(line.len(), 94);
        assert!(line.chars().all(|c| c == '9'));
    }
}
