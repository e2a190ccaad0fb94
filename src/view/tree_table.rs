//! Rendering of the flat view as an indented, selectable table.

use super::styles::{RowStyles, INDICATOR_COLLAPSED, INDICATOR_EXPANDED, LEAF_BULLET};
use crate::state::AppState;
use crate::view_state::{RowChange, RowPresentation};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use std::borrow::Cow;
use tracing::warn;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render the tree table into `area`.
///
/// Every row is mapped through [`RowPresentation`] on every draw; nothing
/// about presentation is cached between frames.
pub fn render_tree_table(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    styles: &RowStyles,
    indent_width: u16,
    list_state: &mut ListState,
) {
    let title = format!(
        " treetab — {}/{} rows ",
        state.row_count(),
        state.tree().len()
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner_width = area.width.saturating_sub(2);

    let items: Vec<ListItem> = state
        .flat()
        .rows()
        .iter()
        .filter_map(|&id| match RowPresentation::for_node(state.tree(), id) {
            Some(row) => Some(ListItem::new(row_line(row, styles, indent_width, inner_width))),
            None => {
                // Flat view and tree disagree; must not happen.
                warn!(node = id.index(), "visible node unreachable in tree");
                None
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styles.selected_style());
    frame.render_stateful_widget(list, area, list_state);
}

/// Render the one-line footer: key hints plus a summary of the last
/// change-set.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = "j/k move · enter toggle · h/l close/open · r reload · q quit";
    let summary = change_summary(state.last_change());
    let text = if summary.is_empty() {
        Cow::Borrowed(hints)
    } else {
        Cow::Owned(format!("{hints}  [{summary}]"))
    };
    frame.render_widget(Paragraph::new(text), area);
}

fn row_line<'a>(
    row: RowPresentation<'a>,
    styles: &RowStyles,
    indent_width: u16,
    max_width: u16,
) -> Line<'a> {
    let indent = " ".repeat(row.indent(indent_width) as usize);
    let marker = if row.has_children {
        if row.expanded {
            INDICATOR_EXPANDED
        } else {
            INDICATOR_COLLAPSED
        }
    } else {
        LEAF_BULLET
    };

    // indicator column + separator are one cell each
    let used = indent.len() + 2;
    let budget = (max_width as usize).saturating_sub(used);
    let title = truncate_to_width(row.title, budget);

    Line::from(vec![
        Span::raw(indent),
        Span::styled(marker, styles.indicator_style()),
        Span::raw(" "),
        Span::styled(title, styles.title_style(row.has_children)),
    ])
}

/// Short description of a change-set for the footer.
fn change_summary(change: Option<&RowChange>) -> String {
    match change {
        None => String::new(),
        Some(RowChange::Reload) => "reloaded".to_string(),
        Some(RowChange::Patch { inserted, deleted }) => {
            if !inserted.is_empty() {
                format!("+{} rows", inserted.len())
            } else if !deleted.is_empty() {
                format!("-{} rows", deleted.len())
            } else {
                String::new()
            }
        }
    }
}

/// Cut a label to a display-cell budget, appending an ellipsis when
/// anything was dropped. Width-aware, so wide glyphs count as two cells.
fn truncate_to_width(text: &str, max_width: usize) -> Cow<'_, str> {
    if text.width() <= max_width {
        return Cow::Borrowed(text);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let budget = max_width - 1; // room for the ellipsis
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    Cow::Owned(out)
}
