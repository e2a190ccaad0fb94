//! treetab - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// treetab - TUI collapsible tree table
#[derive(Parser, Debug)]
#[command(name = "treetab")]
#[command(version)]
#[command(about = "Browse a hierarchy as a collapsible flat table")]
pub struct Args {
    /// Path to a TOML outline file (uses the built-in sample forest if not provided)
    pub outline: Option<PathBuf>,

    /// Indentation in cells per nesting level
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=16))]
    pub indent: Option<u16>,

    /// Start with every branch expanded
    #[arg(short, long)]
    pub expand_all: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to log file for tracing output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Resolve configuration with the full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = treetab::config::load_config_with_precedence(args.config.clone())?;
        let merged = treetab::config::merge_config(config_file);
        let with_env = treetab::config::apply_env_overrides(merged);

        let expand_all_override = if args.expand_all { Some(true) } else { None };
        treetab::config::apply_cli_overrides(
            with_env,
            args.indent,
            expand_all_override,
            args.log_file.clone(),
        )
    };

    treetab::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    // Fixed topology for the session: outline file if given, sample forest
    // otherwise.
    let mut specs = match &args.outline {
        Some(path) => treetab::source::load_outline(path)?,
        None => treetab::model::sample_forest(),
    };
    if config.expand_all {
        expand_all_specs(&mut specs);
    }

    let app_state = treetab::state::AppState::from_specs(&specs);
    info!(
        nodes = app_state.tree().len(),
        visible = app_state.row_count(),
        "tree constructed"
    );

    let colors = treetab::view::ColorConfig::from_env_and_args(args.no_color);
    treetab::view::run(app_state, &config, colors)?;

    Ok(())
}

/// Mark every branch in the spec forest as expanded.
fn expand_all_specs(specs: &mut [treetab::model::NodeSpec]) {
    for spec in specs {
        if !spec.children.is_empty() {
            spec.expanded = true;
            expand_all_specs(&mut spec.children);
        }
    }
}
