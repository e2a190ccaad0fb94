//! Domain model types (pure).
//!
//! The arena tree, declarative node specs, and domain key actions. Nothing
//! here touches the terminal.

pub mod key_action;
pub mod sample;
pub mod tree;

// Re-export for convenience
pub use key_action::KeyAction;
pub use sample::sample_forest;
pub use tree::{NodeId, NodeSpec, Tree, TreeBuilder};
