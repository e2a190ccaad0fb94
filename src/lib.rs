//! treetab
//!
//! TUI collapsible tree table: a hierarchy browsed as a flat, animatable
//! list. The pure core (tree model, flat projection, incremental toggle
//! diff) lives in `model`, `view_state`, and `state`; the impure shell
//! (terminal, event loop, rendering) lives in `view`.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod tests;
