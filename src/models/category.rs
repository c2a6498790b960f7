//! Layout categories and their keybind-data source references.

use crate::models::Keybind;
use serde::{Deserialize, Serialize};

/// Category filter of a source reference.
///
/// Layout files accept either a single category name or a list of names;
/// a single string is equivalent to a one-element list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryPick {
    /// One category name
    One(String),
    /// Several category names
    Many(Vec<String>),
}

impl CategoryPick {
    /// Checks whether a document category name is selected by this pick.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::One(pick) => pick == name,
            Self::Many(picks) => picks.iter().any(|pick| pick == name),
        }
    }
}

/// Reference to an external keybind-data document.
///
/// `file` identifies the document (a path, resolved relative to the layout
/// file's directory). `pick_category` optionally restricts which of the
/// document's categories contribute keybinds; when absent, all of them do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Path of the keybind-data document
    pub file: String,
    /// Optional filter naming the document categories to take keybinds from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick_category: Option<CategoryPick>,
}

impl SourceRef {
    /// Creates a source reference with no category filter.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            pick_category: None,
        }
    }

    /// Restricts this source to a single document category.
    #[must_use]
    pub fn pick(mut self, category: impl Into<String>) -> Self {
        self.pick_category = Some(CategoryPick::One(category.into()));
        self
    }
}

/// A named grouping of keybinds on the rendered sheet.
///
/// Before resolution, a category lists its keybind sources (lowest priority
/// first) plus inline keybinds (highest priority). After resolution, `sources`
/// is empty and `keybinds` holds the fully merged result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name of the category
    pub name: String,
    /// Optional theme color variant reference (validated against the theme)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    /// Optional icon reference (validated against the icon set)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    /// Ordered source references; earlier sources are lower priority
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceRef>,
    /// Inline keybinds; always the highest-priority contribution
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keybinds: Vec<Keybind>,
}

impl Category {
    /// Creates an empty category with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            theme_color: None,
            icon_name: None,
            sources: Vec::new(),
            keybinds: Vec::new(),
        }
    }

    /// Sets the theme color reference.
    #[must_use]
    pub fn with_theme_color(mut self, color: impl Into<String>) -> Self {
        self.theme_color = Some(color.into());
        self
    }

    /// Sets the icon reference.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon_name = Some(icon.into());
        self
    }
}
