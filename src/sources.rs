//! Keybind-data source loading.
//!
//! This module defines the loader seam the resolver pulls source documents
//! through, plus the file-backed implementation used by the CLI. The resolver
//! only ever sees the [`SourceLoader`] trait, so tests drive it with in-memory
//! fakes.

use crate::models::KeybindDocument;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A referenced keybind document could not be loaded.
///
/// Covers every loader failure mode: the file is missing, unreadable, or not
/// a valid keybind document. Propagated verbatim through resolution; a single
/// unavailable source aborts the whole layout resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnavailable {
    /// The source reference as written in the layout
    pub file: String,
    /// What went wrong while loading it
    pub reason: String,
}

impl SourceUnavailable {
    /// Creates an error for the given source reference.
    pub fn new(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for SourceUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Keybind source '{}' unavailable: {}", self.file, self.reason)
    }
}

impl std::error::Error for SourceUnavailable {}

/// Loader seam for keybind-data documents.
///
/// `file` is the reference string as written in the layout; how it is
/// interpreted (path, registry key, ...) is up to the implementation.
pub trait SourceLoader {
    /// Loads the referenced document.
    ///
    /// # Errors
    ///
    /// Returns [`SourceUnavailable`] when the document cannot be produced for
    /// any reason.
    fn load(&self, file: &str) -> Result<KeybindDocument, SourceUnavailable>;
}

/// File-backed source loader.
///
/// Resolves relative references against a base directory (the layout file's
/// directory) and parses each file as a JSON keybind document.
#[derive(Debug, Clone)]
pub struct FileSourceLoader {
    /// Directory that relative source references are resolved against
    base_dir: PathBuf,
}

impl FileSourceLoader {
    /// Creates a loader resolving relative references against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolves a source reference to a concrete path.
    fn resolve_path(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

impl SourceLoader for FileSourceLoader {
    fn load(&self, file: &str) -> Result<KeybindDocument, SourceUnavailable> {
        let path = self.resolve_path(file);

        if !path.exists() {
            return Err(SourceUnavailable::new(
                file,
                format!("file not found: {}", path.display()),
            ));
        }

        if !path.is_file() {
            return Err(SourceUnavailable::new(
                file,
                format!("not a file: {}", path.display()),
            ));
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| SourceUnavailable::new(file, format!("failed to read file: {e}")))?;

        serde_json::from_str(&content)
            .map_err(|e| SourceUnavailable::new(file, format!("invalid keybind document: {e}")))
    }
}

/// In-memory source loader keyed by reference string.
///
/// Backs unit tests and any caller that already holds its documents.
#[derive(Debug, Clone, Default)]
pub struct MemorySourceLoader {
    documents: HashMap<String, KeybindDocument>,
}

impl MemorySourceLoader {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a document under a reference string.
    pub fn insert(&mut self, file: impl Into<String>, document: KeybindDocument) {
        self.documents.insert(file.into(), document);
    }
}

impl SourceLoader for MemorySourceLoader {
    fn load(&self, file: &str) -> Result<KeybindDocument, SourceUnavailable> {
        self.documents
            .get(file)
            .cloned()
            .ok_or_else(|| SourceUnavailable::new(file, "no such document"))
    }
}
