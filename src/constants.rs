//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name, layout discovery candidates, and
//! the reserved keys of theme documents.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Keysheet";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "keysheet";

/// Default layout file names probed per directory, in priority order.
pub const LAYOUT_FILE_CANDIDATES: &[&str] =
    &["keysheet.yml", "keysheet.yaml", "layout.yml", ".keysheet.yml"];

/// How many directory levels layout discovery climbs by default.
pub const DEFAULT_SEARCH_DEPTH: usize = 10;

/// Theme key holding the human-readable theme name.
pub const THEME_NAME_KEY: &str = "name";

/// Theme key pointing at the parent theme. Never present on a resolved theme.
pub const INHERITS_FROM_KEY: &str = "inherits_from";

/// Theme key holding the per-color style mappings.
pub const COLOR_VARIANTS_KEY: &str = "color_variants";
