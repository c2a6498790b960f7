//! Category icons.
//!
//! Icons are named SVG snippets referenced from layout categories. A builtin
//! set ships embedded in the binary; users extend or shadow it by dropping
//! `<name>.svg` files into their icon directory.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The builtin icon set embedded at compile time.
const BUILTIN_ICONS: &str = include_str!("builtin.json");

/// Named icon collection, sorted by name.
#[derive(Debug, Clone)]
pub struct IconSet {
    icons: BTreeMap<String, String>,
}

impl IconSet {
    /// Loads the builtin icons plus any `*.svg` files in `user_dir`.
    ///
    /// A user icon with a builtin's name shadows it. A missing or unset
    /// directory just means no user icons.
    ///
    /// # Errors
    ///
    /// Fails if the embedded set is malformed or a user icon file cannot be
    /// read.
    pub fn load(user_dir: Option<&Path>) -> Result<Self> {
        let mut icons: BTreeMap<String, String> =
            serde_json::from_str(BUILTIN_ICONS).context("Failed to parse embedded icon set")?;

        if let Some(dir) = user_dir {
            if dir.is_dir() {
                for entry in fs::read_dir(dir)
                    .with_context(|| format!("Failed to read icon directory {}", dir.display()))?
                {
                    let path = entry
                        .with_context(|| {
                            format!("Failed to read icon directory {}", dir.display())
                        })?
                        .path();
                    if path.extension().and_then(|ext| ext.to_str()) != Some("svg") {
                        continue;
                    }
                    let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                        continue;
                    };
                    let markup = fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read icon {}", path.display()))?;
                    icons.insert(name.to_string(), markup);
                }
            }
        }

        Ok(Self { icons })
    }

    /// Loads only the builtin icons.
    ///
    /// # Errors
    ///
    /// Fails if the embedded set is malformed.
    pub fn builtin() -> Result<Self> {
        Self::load(None)
    }

    /// Whether an icon with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// The SVG markup for an icon, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.icons.get(name).map(String::as_str)
    }

    /// All icon names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.icons.keys().cloned().collect()
    }
}
