//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`crate::config::KeyBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move the selection cursor up one row. Default: k/↑
    SelectPrev,
    /// Move the selection cursor down one row. Default: j/↓
    SelectNext,
    /// Jump the selection to the first row. Default: g/Home
    SelectFirst,
    /// Jump the selection to the last row. Default: G/End
    SelectLast,

    /// Toggle the selected row between expanded and collapsed. Default: Enter/Space
    Toggle,
    /// Expand the selected row if it is a collapsed branch. Default: l/→
    Expand,
    /// Collapse the selected row if it is an expanded branch. Default: h/←
    Collapse,

    /// Rebuild the flat view from scratch (full-reload fallback). Default: r
    Reload,
    /// Exit the application. Default: q/Ctrl+C
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_not_equals_expand_or_collapse() {
        assert_ne!(KeyAction::Toggle, KeyAction::Expand);
        assert_ne!(KeyAction::Toggle, KeyAction::Collapse);
    }

    #[test]
    fn actions_are_copy_and_hashable() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        let action = KeyAction::Reload;
        set.insert(action);
        assert!(set.contains(&action), "copied action should hash identically");
    }
}
