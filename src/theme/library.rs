//! Theme storage: embedded builtins plus an optional user theme directory.

use super::resolver::{ThemeError, ThemeRegistry};
use super::Theme;
use std::fs;
use std::path::PathBuf;

/// Builtin themes embedded in the binary at compile time.
const BUILTIN_THEMES: &[(&str, &str)] = &[
    ("dark", include_str!("builtin/dark.json")),
    ("default", include_str!("builtin/default.json")),
    ("minimal", include_str!("builtin/minimal.json")),
];

/// Name-to-theme store backing resolution.
///
/// Lookup order: a `<name>.json` file in the user theme directory wins over
/// the builtin of the same name, so users can shadow any builtin wholesale.
#[derive(Debug, Clone)]
pub struct ThemeLibrary {
    /// Optional directory of user theme files
    themes_dir: Option<PathBuf>,
}

impl ThemeLibrary {
    /// Creates a library over the builtins plus an optional user directory.
    #[must_use]
    pub const fn new(themes_dir: Option<PathBuf>) -> Self {
        Self { themes_dir }
    }

    /// Creates a library serving only the builtin themes.
    #[must_use]
    pub const fn builtin_only() -> Self {
        Self { themes_dir: None }
    }

    /// Names of the embedded builtin themes, sorted.
    #[must_use]
    pub fn builtin_names() -> Vec<&'static str> {
        BUILTIN_THEMES.iter().map(|(name, _)| *name).collect()
    }

    /// Whether a name refers to a builtin theme.
    #[must_use]
    pub fn is_builtin(name: &str) -> bool {
        BUILTIN_THEMES.iter().any(|(builtin, _)| *builtin == name)
    }

    /// Path of the user theme file for `name`, if one exists.
    #[must_use]
    pub fn user_theme_path(&self, name: &str) -> Option<PathBuf> {
        let dir = self.themes_dir.as_ref()?;
        let path = dir.join(format!("{name}.json"));
        path.is_file().then_some(path)
    }

    /// All available theme names, builtin and user, sorted without duplicates.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Self::builtin_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        if let Some(dir) = &self.themes_dir {
            if let Ok(entries) = fs::read_dir(dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                        continue;
                    }
                    if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                        names.push(stem.to_string());
                    }
                }
            }
        }

        names.sort();
        names.dedup();
        names
    }
}

impl ThemeRegistry for ThemeLibrary {
    fn load(&self, name: &str) -> Result<Theme, ThemeError> {
        if let Some(path) = self.user_theme_path(name) {
            let content = fs::read_to_string(&path).map_err(|e| ThemeError::Invalid {
                name: name.to_string(),
                reason: format!("failed to read {}: {e}", path.display()),
            })?;
            return serde_json::from_str(&content).map_err(|e| ThemeError::Invalid {
                name: name.to_string(),
                reason: format!("invalid theme JSON: {e}"),
            });
        }

        let (_, json) = BUILTIN_THEMES
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))?;

        serde_json::from_str(json).map_err(|e| ThemeError::Invalid {
            name: name.to_string(),
            reason: format!("invalid builtin theme: {e}"),
        })
    }
}
