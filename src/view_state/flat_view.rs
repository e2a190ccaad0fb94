//! The flat view: display-order projection of the tree, kept in sync
//! incrementally as expansion flags change.
//!
//! [`flatten`] is the ground truth: depth-first pre-order, descending into a
//! node's children only while that node is expanded. [`FlatView`] holds the
//! materialized projection and patches it in place on toggle, reporting the
//! inserted or deleted row positions so the shell can animate them. After
//! every patch the view must equal a fresh `flatten` of the tree; that
//! equivalence is debug-asserted here and property-tested in `crate::tests`.

use super::types::RowIndex;
use crate::model::{NodeId, Tree};
use tracing::debug;

/// Full projection of the forest: every visible node in display order.
///
/// Pure and deterministic; this is the reload/verification path.
pub fn flatten(tree: &Tree) -> Vec<NodeId> {
    flatten_forest(tree, tree.roots())
}

/// Projection of an arbitrary sub-forest, honoring each node's own
/// expansion flag. Used both by [`flatten`] and to compute the run of rows
/// a toggle makes visible or hidden.
pub fn flatten_forest(tree: &Tree, ids: &[NodeId]) -> Vec<NodeId> {
    let mut rows = Vec::new();
    collect(tree, ids, &mut rows);
    rows
}

fn collect(tree: &Tree, ids: &[NodeId], out: &mut Vec<NodeId>) {
    for &id in ids {
        out.push(id);
        if tree.is_expanded(id) {
            collect(tree, tree.children(id), out);
        }
    }
}

/// Row positions changed by a toggle, for the shell to animate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowChange {
    /// The whole view was replaced; re-render everything.
    Reload,
    /// Minimal patch: rows inserted at / deleted from these positions.
    /// A single toggle only ever populates one of the two lists.
    Patch {
        /// Positions (in the new view) of rows that appeared.
        inserted: Vec<RowIndex>,
        /// Positions (in the old view) of rows that disappeared.
        deleted: Vec<RowIndex>,
    },
}

impl RowChange {
    /// A patch that changed nothing.
    pub fn is_noop(&self) -> bool {
        match self {
            RowChange::Reload => false,
            RowChange::Patch { inserted, deleted } => inserted.is_empty() && deleted.is_empty(),
        }
    }
}

/// Materialized display-order sequence of visible nodes.
///
/// Invariant: outside of [`FlatView::toggle_at`] this always equals
/// [`flatten`] of the current tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatView {
    rows: Vec<NodeId>,
}

impl FlatView {
    /// Project the initial view from the tree.
    pub fn new(tree: &Tree) -> Self {
        Self {
            rows: flatten(tree),
        }
    }

    /// Number of visible rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when nothing is visible (empty forest).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Node at a row position, or `None` when out of range.
    pub fn get(&self, row: RowIndex) -> Option<NodeId> {
        self.rows.get(row.get()).copied()
    }

    /// All visible nodes in display order.
    pub fn rows(&self) -> &[NodeId] {
        &self.rows
    }

    /// Replace the view wholesale with a fresh projection.
    ///
    /// The simple, always-correct fallback; the incremental path must agree
    /// with it.
    pub fn rebuild(&mut self, tree: &Tree) -> RowChange {
        self.rows = flatten(tree);
        debug!(rows = self.rows.len(), "flat view rebuilt");
        RowChange::Reload
    }

    /// Toggle the node at `row` and patch the view in place.
    ///
    /// Returns `None` for an out-of-range row or a leaf; both are no-ops
    /// with no observable effect. Otherwise flips the node's expansion flag
    /// and returns the positions inserted (expand) or deleted (collapse).
    ///
    /// Collapsing does not touch descendants' flags, so a branch that was
    /// expanded when it went out of view reopens expanded.
    pub fn toggle_at(&mut self, tree: &mut Tree, row: RowIndex) -> Option<RowChange> {
        let id = self.get(row)?;
        if !tree.has_children(id) {
            return None;
        }

        let change = if tree.is_expanded(id) {
            self.collapse(tree, row, id)
        } else {
            self.expand(tree, row, id)
        };

        debug_assert_eq!(
            self.rows,
            flatten(tree),
            "incremental patch diverged from full flatten"
        );
        Some(change)
    }

    fn expand(&mut self, tree: &mut Tree, row: RowIndex, id: NodeId) -> RowChange {
        tree.set_expanded(id, true);
        // The child forest is flattened with each child's own flag
        // respected, so previously expanded subtrees become visible again
        // in one step.
        let revealed = flatten_forest(tree, tree.children(id));
        let at = row.get() + 1;
        self.rows.splice(at..at, revealed.iter().copied());

        debug!(row = row.get(), count = revealed.len(), "row expanded");
        RowChange::Patch {
            inserted: (at..at + revealed.len()).map(RowIndex::new).collect(),
            deleted: Vec::new(),
        }
    }

    fn collapse(&mut self, tree: &mut Tree, row: RowIndex, id: NodeId) -> RowChange {
        // Count the visible descendants before flipping the flag; their own
        // flags stay untouched so re-expanding restores this exact shape.
        let hidden = flatten_forest(tree, tree.children(id)).len();
        tree.set_expanded(id, false);
        let at = row.get() + 1;
        self.rows.drain(at..at + hidden);

        debug!(row = row.get(), count = hidden, "row collapsed");
        RowChange::Patch {
            inserted: Vec::new(),
            deleted: (at..at + hidden).map(RowIndex::new).collect(),
        }
    }
}
