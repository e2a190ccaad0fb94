//! Startup input: loading the forest from a TOML outline file.
//!
//! The outline fixes the topology for the whole session; only expansion
//! flags change afterwards. Format:
//!
//! ```toml
//! [[node]]
//! title = "Fruits"
//! expanded = true
//!
//!   [[node.children]]
//!   title = "Apple"
//! ```

use crate::model::NodeSpec;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading an outline file.
#[derive(Debug, Error)]
pub enum OutlineError {
    /// Outline file could not be read.
    #[error("Failed to read outline file at {}: {source}", path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Outline file contains invalid TOML or an invalid node shape.
    #[error("Invalid outline in {}: {reason}", path.display())]
    Parse {
        /// Path with the invalid outline.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Outline file parsed but described no nodes at all.
    #[error("Outline file {} contains no nodes", path.display())]
    EmptyForest {
        /// Path of the empty outline.
        path: PathBuf,
    },
}

/// Top-level outline document: an ordered list of `[[node]]` tables.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct OutlineFile {
    #[serde(default)]
    node: Vec<NodeSpec>,
}

/// Load a forest description from a TOML outline file.
///
/// Unlike the config file, an explicitly named outline must exist and
/// parse; every failure is surfaced.
pub fn load_outline(path: &Path) -> Result<Vec<NodeSpec>, OutlineError> {
    let contents = std::fs::read_to_string(path).map_err(|source| OutlineError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let outline: OutlineFile = toml::from_str(&contents).map_err(|e| OutlineError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if outline.node.is_empty() {
        return Err(OutlineError::EmptyForest {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), roots = outline.node.len(), "outline loaded");
    Ok(outline.node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_outline(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("treetab_test_outlines");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_nested_outline() {
        let path = write_outline(
            "nested.toml",
            r#"
            [[node]]
            title = "Fruits"
            expanded = true

              [[node.children]]
              title = "Apple"

              [[node.children]]
              title = "Citrus"

                [[node.children.children]]
                title = "Orange"

            [[node]]
            title = "Vegetables"
            "#,
        );

        let specs = load_outline(&path).unwrap();

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].title, "Fruits");
        assert!(specs[0].expanded);
        assert_eq!(specs[0].children.len(), 2);
        assert_eq!(specs[0].children[1].children[0].title, "Orange");
        assert_eq!(specs[1].title, "Vegetables");
        assert!(specs[1].children.is_empty());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = load_outline(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(OutlineError::Read { .. })));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let path = write_outline("invalid.toml", "[[node] title=");
        let result = load_outline(&path);
        assert!(matches!(result, Err(OutlineError::Parse { .. })));
    }

    #[test]
    fn unknown_node_fields_are_a_parse_error() {
        let path = write_outline(
            "unknown_field.toml",
            r#"
            [[node]]
            title = "a"
            color = "red"
            "#,
        );
        let result = load_outline(&path);
        assert!(matches!(result, Err(OutlineError::Parse { .. })));
    }

    #[test]
    fn empty_outline_is_rejected() {
        let path = write_outline("empty.toml", "");
        let result = load_outline(&path);
        assert!(matches!(result, Err(OutlineError::EmptyForest { .. })));
    }
}
