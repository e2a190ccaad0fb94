//! Derived view state (pure).
//!
//! The flat display-order projection of the tree, the incremental toggle
//! diff, and the per-row presentation mapping. No terminal types here.

pub mod flat_view;
pub mod row;
pub mod types;

pub use flat_view::{flatten, flatten_forest, FlatView, RowChange};
pub use row::RowPresentation;
pub use types::RowIndex;
