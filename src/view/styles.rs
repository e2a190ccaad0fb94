//! Row styling configuration.
//!
//! Distinct styles for branch rows, leaf rows, disclosure indicators, and
//! the selection highlight.

use ratatui::style::{Color, Modifier, Style};

/// Disclosure indicator for a collapsed branch (points right).
pub const INDICATOR_COLLAPSED: &str = "▸";
/// Disclosure indicator for an expanded branch (points down).
pub const INDICATOR_EXPANDED: &str = "▾";
/// Marker rendered in place of an indicator on leaf rows.
pub const LEAF_BULLET: &str = "·";

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== RowStyles =====

/// Styling for tree table rows.
#[derive(Debug, Clone)]
pub struct RowStyles {
    branch_style: Style,
    leaf_style: Style,
    indicator_style: Style,
    selected_style: Style,
}

impl RowStyles {
    /// Create row styles with the default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create row styles for a specific color configuration.
    ///
    /// With colors disabled the selection still inverts, everything else
    /// renders unstyled.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                branch_style: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                leaf_style: Style::default(),
                indicator_style: Style::default().fg(Color::Yellow),
                selected_style: Style::default().add_modifier(Modifier::REVERSED),
            }
        } else {
            Self {
                branch_style: Style::default(),
                leaf_style: Style::default(),
                indicator_style: Style::default(),
                selected_style: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }

    /// Style for a row label, branch vs leaf.
    pub fn title_style(&self, has_children: bool) -> Style {
        if has_children {
            self.branch_style
        } else {
            self.leaf_style
        }
    }

    /// Style for the disclosure indicator / leaf bullet column.
    pub fn indicator_style(&self) -> Style {
        self.indicator_style
    }

    /// Highlight style for the selected row.
    pub fn selected_style(&self) -> Style {
        self.selected_style
    }
}

impl Default for RowStyles {
    fn default() -> Self {
        Self::new()
    }
}
