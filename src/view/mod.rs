//! TUI rendering and terminal management (impure shell)

mod styles;
mod tree_table;

pub use styles::{ColorConfig, RowStyles, INDICATOR_COLLAPSED, INDICATOR_EXPANDED, LEAF_BULLET};
pub use tree_table::{render_footer, render_tree_table};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::KeyAction;
use crate::state::AppState;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::ListState;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: RowStyles,
    indent_width: u16,
    list_state: ListState,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up the terminal in raw mode with the alternate screen.
    pub fn new(
        app_state: AppState,
        config: &ResolvedConfig,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, app_state, config, colors))
    }

    /// Run the main event loop.
    ///
    /// Blocks on input; every handler runs to completion before the next
    /// event is read, and the frame reflecting a toggle is drawn after its
    /// change-set has been recorded. Returns when the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create an application over an existing terminal (used by tests with
    /// `TestBackend`).
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        config: &ResolvedConfig,
        colors: ColorConfig,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: RowStyles::with_color_config(colors),
            indent_width: config.indent_width,
            list_state: ListState::default(),
        }
    }

    /// Read-only view of the application state (tests).
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event.
    ///
    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Some terminals also deliver key releases; act on presses only.
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, bindings or not
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Strip event-kind/state so lookup matches the configured bindings
        let normalized = KeyEvent::new(key.code, key.modifiers);
        let Some(action) = self.key_bindings.get(normalized) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::SelectNext => self.app_state.select_next(),
            KeyAction::SelectPrev => self.app_state.select_prev(),
            KeyAction::SelectFirst => self.app_state.select_first(),
            KeyAction::SelectLast => self.app_state.select_last(),
            KeyAction::Toggle => {
                if let Some(change) = self.app_state.toggle_selected() {
                    debug!(?change, "toggle change-set");
                }
            }
            KeyAction::Expand => {
                if let Some(change) = self.app_state.expand_selected() {
                    debug!(?change, "expand change-set");
                }
            }
            KeyAction::Collapse => {
                if let Some(change) = self.app_state.collapse_selected() {
                    debug!(?change, "collapse change-set");
                }
            }
            KeyAction::Reload => {
                let change = self.app_state.reload();
                debug!(?change, "full reload");
            }
        }
        false
    }

    /// Draw one frame: the table plus the footer hint line.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        self.list_state.select(Some(self.app_state.selected().get()));

        let Self {
            terminal,
            app_state,
            styles,
            indent_width,
            list_state,
            ..
        } = self;

        terminal.draw(|frame| {
            let [table_area, footer_area] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
                    .areas(frame.area());
            render_tree_table(frame, table_area, app_state, styles, *indent_width, list_state);
            render_footer(frame, footer_area, app_state);
        })?;

        Ok(())
    }
}

/// Run the TUI to completion over the given state, restoring the terminal
/// on the way out (also on error).
pub fn run(app_state: AppState, config: &ResolvedConfig, colors: ColorConfig) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, config, colors)?;
    let result = app.run();
    restore_terminal();
    result
}

/// Leave the alternate screen and give the terminal back. Errors here are
/// deliberately swallowed; there is nothing left to do with them.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_forest;
    use ratatui::backend::TestBackend;

    fn test_app() -> TuiApp<TestBackend> {
        let backend = TestBackend::new(40, 10);
        let terminal = Terminal::new(backend).unwrap();
        TuiApp::with_terminal(
            terminal,
            AppState::from_specs(&sample_forest()),
            &ResolvedConfig::default(),
            ColorConfig::from_env_and_args(true),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut app = test_app();
        assert!(app.handle_key(press(KeyCode::Char('q'))));

        let mut app = test_app();
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn unbound_key_changes_nothing() {
        let mut app = test_app();
        assert!(!app.handle_key(press(KeyCode::Char('z'))));
        assert_eq!(app.app_state().row_count(), 2);
    }

    #[test]
    fn key_release_events_are_ignored() {
        let mut app = test_app();
        let mut release = press(KeyCode::Enter);
        release.kind = KeyEventKind::Release;

        assert!(!app.handle_key(release));
        assert_eq!(app.app_state().row_count(), 2, "release must not toggle");
    }

    #[test]
    fn enter_toggles_selected_row() {
        let mut app = test_app();
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.app_state().row_count(), 5);

        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.app_state().row_count(), 2);
    }

    #[test]
    fn movement_keys_drive_selection() {
        let mut app = test_app();
        app.handle_key(press(KeyCode::Char('j')));
        assert_eq!(app.app_state().selected().get(), 1);
        app.handle_key(press(KeyCode::Char('k')));
        assert_eq!(app.app_state().selected().get(), 0);
        app.handle_key(press(KeyCode::End));
        assert_eq!(app.app_state().selected().get(), 1);
        app.handle_key(press(KeyCode::Home));
        assert_eq!(app.app_state().selected().get(), 0);
    }

    #[test]
    fn draw_renders_table_and_footer() {
        let mut app = test_app();
        app.draw().unwrap();

        let buffer = app.terminal.backend().buffer();
        let text: String = (0..10)
            .map(|y| {
                (0..40)
                    .map(|x| buffer.cell((x, y)).unwrap().symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        assert!(text.contains("Fruits"));
        assert!(text.contains("q quit"));
    }
}
