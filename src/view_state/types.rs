//! Core view-state newtypes

/// Zero-based position of a row in the flat view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RowIndex(usize);

impl RowIndex {
    /// Wrap a zero-based row position.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw usize value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// The row immediately after this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// The row immediately before this one, saturating at the first row.
    pub fn prev(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}
