//! Themes: structural style documents with single-parent inheritance.
//!
//! A theme is a JSON object whose leaves are style strings. Well-known keys
//! carry meaning: `name` labels the theme, `inherits_from` names a parent to
//! resolve against, and `color_variants` maps variant names (referenced by
//! layout categories) to per-variant sections. Everything else is free-form
//! and flows to the renderer untouched.

mod library;
mod resolver;
mod value;

pub use library::ThemeLibrary;
pub use resolver::{resolve_theme, ThemeError, ThemeRegistry};
pub use value::{ThemeMap, ThemeValue};

use crate::constants::{COLOR_VARIANTS_KEY, INHERITS_FROM_KEY, THEME_NAME_KEY};
use serde::{Deserialize, Serialize};

/// A theme document, resolved or not.
///
/// Thin wrapper over a [`ThemeMap`] so theme files round-trip as plain JSON
/// objects. Accessors interpret the well-known keys; a resolved theme never
/// contains `inherits_from`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Theme {
    map: ThemeMap,
}

impl Theme {
    /// Wraps an existing map as a theme.
    #[must_use]
    pub const fn from_map(map: ThemeMap) -> Self {
        Self { map }
    }

    /// Borrows the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &ThemeMap {
        &self.map
    }

    /// Unwraps into the underlying map.
    #[must_use]
    pub fn into_map(self) -> ThemeMap {
        self.map
    }

    /// Looks up a top-level value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ThemeValue> {
        self.map.get(key)
    }

    /// The theme's display name, if declared.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.map.get(THEME_NAME_KEY).and_then(ThemeValue::as_text)
    }

    /// The parent theme this one inherits from, if any.
    ///
    /// A non-string `inherits_from` value is treated as absent.
    #[must_use]
    pub fn inherits_from(&self) -> Option<&str> {
        self.map.get(INHERITS_FROM_KEY).and_then(ThemeValue::as_text)
    }

    /// The `color_variants` section, if present and actually a section.
    #[must_use]
    pub fn color_variants(&self) -> Option<&ThemeMap> {
        self.map.get(COLOR_VARIANTS_KEY).and_then(ThemeValue::as_section)
    }

    /// Names of all declared color variants, in sorted order.
    #[must_use]
    pub fn variant_names(&self) -> Vec<String> {
        self.color_variants()
            .map(|variants| variants.keys().cloned().collect())
            .unwrap_or_default()
    }
}
