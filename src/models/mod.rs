//! Data models for layouts, categories, keybinds, and source documents.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of I/O and resolution
//! logic: they describe the shapes of layout files and keybind-data documents
//! as the user writes them, and double as the shapes of resolved output.

pub mod category;
pub mod document;
pub mod keybind;
pub mod layout;

// Re-export all model types
pub use category::{Category, CategoryPick, SourceRef};
pub use document::{KeybindDocument, SourceCategory};
pub use keybind::{Keybind, Keys};
pub use layout::Layout;
