//! Keysheet Library
//!
//! This library provides the resolution core of the Keysheet application:
//! parsing layout files, folding keybind sources into categories, resolving
//! theme inheritance, and validating cross-references before rendering.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod icons;
pub mod models;
pub mod parser;
pub mod resolver;
pub mod sources;
pub mod theme;
pub mod validator;

// Re-export the resolution API
pub use resolver::{merge_keybinds, resolve_category, resolve_layout};
pub use validator::validate_references;
