//! Structural theme values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A theme section: string keys mapped to values, sorted for stable output.
pub type ThemeMap = BTreeMap<String, ThemeValue>;

/// A single theme value: either a style string or a nested section.
///
/// Theme files are JSON objects of arbitrary depth whose leaves are style
/// strings (CSS utility classes). The untagged representation keeps the
/// on-disk format free of enum tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
    /// A leaf style string
    Text(String),
    /// A nested section of further values
    Section(ThemeMap),
}

impl ThemeValue {
    /// Returns the style string if this is a leaf.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Section(_) => None,
        }
    }

    /// Returns the nested section if this is one.
    #[must_use]
    pub const fn as_section(&self) -> Option<&ThemeMap> {
        match self {
            Self::Section(section) => Some(section),
            Self::Text(_) => None,
        }
    }

    /// Whether this value is a nested section.
    #[must_use]
    pub const fn is_section(&self) -> bool {
        matches!(self, Self::Section(_))
    }
}

impl From<&str> for ThemeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<ThemeMap> for ThemeValue {
    fn from(section: ThemeMap) -> Self {
        Self::Section(section)
    }
}
