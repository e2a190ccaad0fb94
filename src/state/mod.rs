//! Application state and event handling glue.

pub mod app_state;

pub use app_state::AppState;
