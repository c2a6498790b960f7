//! Layout document data structure.

use crate::models::Category;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Complete cheatsheet layout description.
///
/// A layout names a template and a theme, an output name for the rendered
/// file, and an ordered list of categories. The same type describes both the
/// raw layout as written by the user and the resolved layout: after
/// resolution every category holds its fully merged keybinds and no sources.
///
/// # Validation
///
/// - `title` must be non-empty
/// - `output_name` must be non-empty
/// - Category names must be non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Sheet title shown on the rendered output
    pub title: String,
    /// Name of the render template (consumed by the renderer, opaque here)
    pub template: String,
    /// Name of the active theme
    pub theme: String,
    /// Base name of the rendered output file
    pub output_name: String,
    /// Ordered categories of the sheet
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Layout {
    /// Creates a layout with no categories.
    pub fn new(
        title: impl Into<String>,
        template: impl Into<String>,
        theme: impl Into<String>,
        output_name: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            template: template.into(),
            theme: theme.into(),
            output_name: output_name.into(),
            categories: Vec::new(),
        }
    }

    /// Validates the structural constraints of this layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the title or output name is empty, or if any
    /// category has an empty name.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            anyhow::bail!("Layout title cannot be empty");
        }

        if self.output_name.trim().is_empty() {
            anyhow::bail!("Layout output_name cannot be empty");
        }

        for (index, category) in self.categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                anyhow::bail!("Category {} has an empty name", index + 1);
            }
        }

        Ok(())
    }
}
