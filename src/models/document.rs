//! Keybind-data document structures produced by source loaders.

use crate::models::Keybind;
use serde::{Deserialize, Serialize};

/// One named category inside a keybind-data document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCategory {
    /// Category name, matched against `pick_category` filters
    pub name: String,
    /// Keybinds of this category, in document order
    #[serde(default)]
    pub keybinds: Vec<Keybind>,
}

/// External keybind-data document.
///
/// Source documents describe the keybinds of one tool, grouped into named
/// categories. Layouts reference these documents through [`SourceRef`]s and
/// pull keybinds out of them during resolution.
///
/// [`SourceRef`]: crate::models::SourceRef
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindDocument {
    /// Name of the tool the document describes (e.g., "VSCode")
    pub tool: String,
    /// Optional tool version the keybinds were captured from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Ordered categories of keybinds
    #[serde(default)]
    pub categories: Vec<SourceCategory>,
}

impl KeybindDocument {
    /// Creates an empty document for the given tool.
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            version: None,
            categories: Vec::new(),
        }
    }
}
