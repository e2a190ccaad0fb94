//! Application state: the tree, its flat projection, and the selection
//! cursor, owned by one explicit instance and threaded through the shell.

use crate::model::{NodeId, NodeSpec, Tree};
use crate::view_state::{FlatView, RowChange, RowIndex};
use tracing::trace;

/// Mutable state behind the tree table.
///
/// Owns the [`Tree`] and keeps the [`FlatView`] synchronized with it; the
/// renderer only ever reads. All mutation happens through the methods here,
/// synchronously on the event thread.
#[derive(Debug, Clone)]
pub struct AppState {
    tree: Tree,
    flat: FlatView,
    selected: RowIndex,
    last_change: Option<RowChange>,
}

impl AppState {
    /// Create state from a constructed tree; the initial flat view is the
    /// full projection.
    pub fn new(tree: Tree) -> Self {
        let flat = FlatView::new(&tree);
        Self {
            tree,
            flat,
            selected: RowIndex::new(0),
            last_change: None,
        }
    }

    /// Create state from declarative specs.
    pub fn from_specs(specs: &[NodeSpec]) -> Self {
        Self::new(Tree::from_specs(specs))
    }

    /// The owned tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The current flat view.
    pub fn flat(&self) -> &FlatView {
        &self.flat
    }

    /// Number of visible rows (the shell's row-count query).
    pub fn row_count(&self) -> usize {
        self.flat.len()
    }

    /// The selection cursor.
    pub fn selected(&self) -> RowIndex {
        self.selected
    }

    /// Node under the selection cursor, if the view is non-empty.
    pub fn selected_node(&self) -> Option<NodeId> {
        self.flat.get(self.selected)
    }

    /// Change reported by the most recent toggle or reload.
    pub fn last_change(&self) -> Option<&RowChange> {
        self.last_change.as_ref()
    }

    /// Move the cursor down one row, stopping at the last row.
    pub fn select_next(&mut self) {
        if self.selected.get() + 1 < self.flat.len() {
            self.selected = self.selected.next();
        }
    }

    /// Move the cursor up one row, stopping at the first row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    /// Jump the cursor to the first row.
    pub fn select_first(&mut self) {
        self.selected = RowIndex::new(0);
    }

    /// Jump the cursor to the last row.
    pub fn select_last(&mut self) {
        self.selected = RowIndex::new(self.flat.len().saturating_sub(1));
    }

    /// Toggle the selected row. No-op (returns `None`) on a leaf or when
    /// the view is empty.
    pub fn toggle_selected(&mut self) -> Option<RowChange> {
        let change = self.flat.toggle_at(&mut self.tree, self.selected)?;
        trace!(selected = self.selected.get(), "toggle applied");
        self.finish_change(change)
    }

    /// Expand the selected row if it is a collapsed branch; otherwise no-op.
    pub fn expand_selected(&mut self) -> Option<RowChange> {
        let id = self.selected_node()?;
        if self.tree.has_children(id) && !self.tree.is_expanded(id) {
            self.toggle_selected()
        } else {
            None
        }
    }

    /// Collapse the selected row if it is an expanded branch; otherwise no-op.
    pub fn collapse_selected(&mut self) -> Option<RowChange> {
        let id = self.selected_node()?;
        if self.tree.has_children(id) && self.tree.is_expanded(id) {
            self.toggle_selected()
        } else {
            None
        }
    }

    /// Replace the flat view with a fresh full projection.
    pub fn reload(&mut self) -> RowChange {
        let change = self.flat.rebuild(&self.tree);
        self.clamp_selection();
        self.last_change = Some(change.clone());
        change
    }

    fn finish_change(&mut self, change: RowChange) -> Option<RowChange> {
        self.clamp_selection();
        self.last_change = Some(change.clone());
        Some(change)
    }

    // The cursor only toggles its own row, so removed rows are always after
    // it; the clamp guards the empty-view edge and future callers.
    fn clamp_selection(&mut self) {
        let last = self.flat.len().saturating_sub(1);
        if self.selected.get() > last {
            self.selected = RowIndex::new(last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_forest;

    fn sample_state() -> AppState {
        AppState::from_specs(&sample_forest())
    }

    #[test]
    fn initial_view_is_full_projection_of_collapsed_forest() {
        let state = sample_state();
        assert_eq!(state.row_count(), 2);
        assert_eq!(state.selected(), RowIndex::new(0));
        assert_eq!(state.last_change(), None);
    }

    #[test]
    fn selection_clamps_at_bounds() {
        let mut state = sample_state();
        state.select_prev();
        assert_eq!(state.selected(), RowIndex::new(0));

        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected(), RowIndex::new(1), "stops at last row");

        state.select_first();
        assert_eq!(state.selected(), RowIndex::new(0));
        state.select_last();
        assert_eq!(state.selected(), RowIndex::new(1));
    }

    #[test]
    fn toggle_selected_expands_branch_under_cursor() {
        let mut state = sample_state();
        let change = state.toggle_selected().unwrap();

        assert_eq!(
            change,
            RowChange::Patch {
                inserted: vec![RowIndex::new(1), RowIndex::new(2), RowIndex::new(3)],
                deleted: vec![],
            }
        );
        assert_eq!(state.row_count(), 5);
        assert_eq!(state.last_change(), Some(&change));
    }

    #[test]
    fn toggle_selected_on_leaf_is_noop() {
        let mut state = sample_state();
        state.toggle_selected().unwrap(); // open Fruits
        state.select_next(); // Apple

        assert_eq!(state.toggle_selected(), None);
        assert_eq!(state.row_count(), 5);
    }

    #[test]
    fn expand_selected_only_acts_on_collapsed_branches() {
        let mut state = sample_state();
        assert!(state.expand_selected().is_some());
        assert!(state.expand_selected().is_none(), "already expanded");
    }

    #[test]
    fn collapse_selected_only_acts_on_expanded_branches() {
        let mut state = sample_state();
        assert!(state.collapse_selected().is_none(), "already collapsed");
        state.expand_selected().unwrap();
        assert!(state.collapse_selected().is_some());
        assert_eq!(state.row_count(), 2);
    }

    #[test]
    fn selection_survives_collapse_of_own_row() {
        let mut state = sample_state();
        state.toggle_selected().unwrap(); // open Fruits
        state.toggle_selected().unwrap(); // close Fruits again

        assert_eq!(state.selected(), RowIndex::new(0));
        assert_eq!(state.row_count(), 2);
    }

    #[test]
    fn reload_reports_full_refresh() {
        let mut state = sample_state();
        assert_eq!(state.reload(), RowChange::Reload);
        assert_eq!(state.row_count(), 2);
    }

    #[test]
    fn selected_node_tracks_cursor() {
        let mut state = sample_state();
        state.select_next();
        let node = state.selected_node().unwrap();
        assert_eq!(state.tree().title(node), "Vegetables");
    }
}
