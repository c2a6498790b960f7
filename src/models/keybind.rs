//! Keybind entry data structures.

use serde::{Deserialize, Serialize};

/// Key chord(s) bound to an action.
///
/// Layout and source files accept either a single string (`"Ctrl+S"`) or an
/// ordered list of strings for multi-chord commands (`["Ctrl+K", "Ctrl+S"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keys {
    /// A single key chord (e.g., "Ctrl+S")
    Single(String),
    /// An ordered chord sequence (e.g., ["Ctrl+K", "Ctrl+S"])
    Sequence(Vec<String>),
}

impl Keys {
    /// Returns the chords as a slice-backed list, regardless of representation.
    #[must_use]
    pub fn chords(&self) -> Vec<&str> {
        match self {
            Self::Single(chord) => vec![chord.as_str()],
            Self::Sequence(chords) => chords.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Keys {
    fn from(chord: &str) -> Self {
        Self::Single(chord.to_string())
    }
}

/// One action-to-key(s) mapping entry.
///
/// The `action` string is the entry's identity: two keybinds with the same
/// `action` are the same logical entry, and later sources replace earlier ones
/// wholesale during resolution. Entries without an `action` are accepted but
/// never de-duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keybind {
    /// Action name identifying this entry (e.g., "Save file")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Key chord(s) bound to the action
    pub keys: Keys,
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Keybind {
    /// Creates a keybind with an action and a single key chord.
    pub fn new(action: impl Into<String>, keys: impl Into<Keys>) -> Self {
        Self {
            action: Some(action.into()),
            keys: keys.into(),
            description: None,
        }
    }

    /// Sets the description for this keybind.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
