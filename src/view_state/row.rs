//! Row presentation mapping: what the renderer needs for one visible row.

use crate::model::{NodeId, Tree};

/// Presentation tuple for a single flat-view row.
///
/// A pure, stateless projection of `(tree, node)`; recomputed for every row
/// on every draw and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPresentation<'a> {
    /// Display label.
    pub title: &'a str,
    /// Root-relative depth (roots are 0); drives indentation.
    pub depth: usize,
    /// Whether the row gets a disclosure indicator (branch) or not (leaf).
    pub has_children: bool,
    /// Indicator orientation: collapsed points right, expanded points down.
    pub expanded: bool,
}

impl<'a> RowPresentation<'a> {
    /// Build the presentation for a node.
    ///
    /// Returns `None` when the node is not reachable in the tree, which
    /// would mean the flat view and the tree have desynchronized.
    pub fn for_node(tree: &'a Tree, id: NodeId) -> Option<Self> {
        let depth = tree.depth(id)?;
        Some(Self {
            title: tree.title(id),
            depth,
            has_children: tree.has_children(id),
            expanded: tree.is_expanded(id),
        })
    }

    /// Indentation in terminal cells for a given per-level unit width.
    pub fn indent(&self, unit_width: u16) -> u16 {
        (self.depth as u16).saturating_mul(unit_width)
    }
}
