//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use keysheet::models::{Category, Keybind, KeybindDocument, Layout, SourceCategory, SourceRef};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Builds a keybind document with one category per `(name, keybinds)` pair.
pub fn test_document(tool: &str, categories: Vec<(&str, Vec<Keybind>)>) -> KeybindDocument {
    KeybindDocument {
        tool: tool.to_string(),
        version: Some("1.0".to_string()),
        categories: categories
            .into_iter()
            .map(|(name, keybinds)| SourceCategory {
                name: name.to_string(),
                keybinds,
            })
            .collect(),
    }
}

/// First source of the override scenario: two actions, both on their
/// original bindings.
pub fn source_one() -> KeybindDocument {
    test_document(
        "Source One",
        vec![(
            "General",
            vec![
                Keybind::new("Test Action", "Ctrl+A"),
                Keybind::new("Source1 Only", "Ctrl+1"),
            ],
        )],
    )
}

/// Second source: overrides "Test Action" and brings one of its own.
pub fn source_two() -> KeybindDocument {
    test_document(
        "Source Two",
        vec![(
            "General",
            vec![
                Keybind::new("Test Action", "Ctrl+B"),
                Keybind::new("Source2 Only", "Ctrl+2"),
            ],
        )],
    )
}

/// Writes a keybind document as JSON under `dir`.
pub fn write_document(dir: &Path, name: &str, document: &KeybindDocument) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create document directory");
    }
    let json = serde_json::to_string_pretty(document).expect("Failed to serialize document");
    fs::write(&path, json).expect("Failed to write document");
    path
}

/// Writes a layout as `keysheet.yml` under `dir` and returns its path.
pub fn write_layout(dir: &Path, layout: &Layout) -> PathBuf {
    let path = dir.join("keysheet.yml");
    let yaml = serde_yml::to_string(layout).expect("Failed to serialize layout");
    fs::write(&path, yaml).expect("Failed to write layout");
    path
}

/// Layout exercising the override chain: source1, then source2, then an
/// inline keybind, all contributing to one category.
pub fn override_scenario_layout() -> Layout {
    let mut category = Category::new("Test Category")
        .with_theme_color("blue")
        .with_icon("terminal");
    category.sources = vec![
        SourceRef::new("source1.json"),
        SourceRef::new("source2.json"),
    ];
    category.keybinds =
        vec![Keybind::new("Test Action", "Ctrl+C").with_description("Inline override")];

    let mut layout = Layout::new("Override Scenario", "grid", "default", "override-scenario");
    layout.categories = vec![category];
    layout
}

/// Writes the override scenario to disk: layout plus both source documents.
pub fn write_override_scenario(dir: &Path) -> PathBuf {
    write_document(dir, "source1.json", &source_one());
    write_document(dir, "source2.json", &source_two());
    write_layout(dir, &override_scenario_layout())
}

/// A command for the binary with its config directory isolated to a temp dir.
///
/// Keeps the returned `TempDir` alive for the duration of the test so the
/// config directory outlives the command.
pub fn isolated_command(bin: &str) -> (Command, TempDir) {
    let config_dir = TempDir::new().expect("Failed to create config dir");
    let mut command = Command::new(bin);
    command.env("KEYSHEET_CONFIG_DIR", config_dir.path());
    (command, config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_sources_share_an_action() {
        let one = source_one();
        let two = source_two();
        assert_eq!(one.categories[0].keybinds[0].action, two.categories[0].keybinds[0].action);
    }

    #[test]
    fn test_fixture_scenario_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let layout_path = write_override_scenario(temp_dir.path());

        let layout = keysheet::parser::parse_layout_file(&layout_path).unwrap();
        assert_eq!(layout.categories.len(), 1);
        assert_eq!(layout.categories[0].sources.len(), 2);
    }
}
