//! Layout file parsing.
//!
//! Layout files are YAML documents describing the sheet: title, template,
//! theme, and categories with their keybind sources. Parsing validates the
//! structural basics; reference checks against themes and icons happen later,
//! after resolution.

use crate::constants::APP_BINARY_NAME;
use crate::models::Layout;
use anyhow::{Context, Result};
use std::path::Path;

/// Parses a YAML layout file into a [`Layout`].
///
/// # Errors
///
/// Returns errors for:
/// - File not found
/// - Invalid YAML
/// - Structurally invalid layouts (empty title, unnamed categories, ...)
pub fn parse_layout_file(path: &Path) -> Result<Layout> {
    // Check if file exists first to provide better error message
    if !path.exists() {
        anyhow::bail!(
            "Layout file not found: {}\n\n\
             Please check the file path and try again.\n\
             If you need help getting started, run: {} init",
            path.display(),
            APP_BINARY_NAME
        );
    }

    if !path.is_file() {
        anyhow::bail!(
            "Path is not a file: {}\n\n\
             Please provide a path to a YAML layout file.",
            path.display()
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

    parse_layout_str(&content)
        .with_context(|| format!("Failed to parse layout file: {}", path.display()))
}

/// Parses a YAML layout from a string.
pub fn parse_layout_str(content: &str) -> Result<Layout> {
    let layout: Layout =
        serde_yml::from_str(content).context("Invalid layout YAML")?;

    layout.validate()?;

    Ok(layout)
}
