//! Init command: scaffold a starter layout in a directory.

use crate::cli::common::{CliError, CliResult};
use clap::Args;
use std::path::PathBuf;

/// Starter layout written by `keysheet init`.
const STARTER_LAYOUT: &str = r#"# Keysheet layout
# Run `keysheet resolve` to produce a self-contained sheet document,
# or `keysheet validate` to check theme color and icon references.

title: My Cheatsheet
template: grid
theme: default
output_name: my-cheatsheet

categories:
  - name: Editor
    theme_color: blue
    icon_name: pencil
    sources:
      - file: keybinds/editor.json
        pick_category: Editing
    keybinds:
      - action: Save All
        keys: Ctrl+Shift+S
        description: Save every open file

  - name: Terminal
    theme_color: green
    icon_name: terminal
    keybinds:
      - action: Clear Screen
        keys: Ctrl+L
      - action: Search History
        keys: Ctrl+R
"#;

/// Starter keybind document referenced by the starter layout.
const STARTER_KEYBINDS: &str = r#"{
  "tool": "Example Editor",
  "version": "1.0",
  "categories": [
    {
      "name": "File Operations",
      "keybinds": [
        { "action": "New File", "keys": "Ctrl+N", "description": "Create new file" },
        { "action": "Open File", "keys": "Ctrl+O", "description": "Open existing file" },
        { "action": "Save File", "keys": "Ctrl+S", "description": "Save current file" }
      ]
    },
    {
      "name": "Editing",
      "keybinds": [
        { "action": "Copy", "keys": "Ctrl+C", "description": "Copy selection" },
        { "action": "Paste", "keys": "Ctrl+V", "description": "Paste from clipboard" },
        { "action": "Undo", "keys": "Ctrl+Z", "description": "Undo last action" }
      ]
    }
  ]
}
"#;

/// Create a starter layout and keybind document
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the working directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> CliResult<()> {
        let target = match &self.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(|e| {
                CliError::io(format!("Failed to determine working directory: {e}"))
            })?,
        };

        std::fs::create_dir_all(&target)
            .map_err(|e| CliError::io(format!("Failed to create {}: {e}", target.display())))?;

        let layout_path = target.join("keysheet.yml");
        if layout_path.exists() {
            return Err(CliError::validation(format!(
                "Refusing to overwrite existing layout: {}",
                layout_path.display()
            )));
        }

        let keybinds_dir = target.join("keybinds");
        std::fs::create_dir_all(&keybinds_dir).map_err(|e| {
            CliError::io(format!("Failed to create {}: {e}", keybinds_dir.display()))
        })?;

        std::fs::write(&layout_path, STARTER_LAYOUT).map_err(|e| {
            CliError::io(format!("Failed to write {}: {e}", layout_path.display()))
        })?;

        let keybinds_path = keybinds_dir.join("editor.json");
        std::fs::write(&keybinds_path, STARTER_KEYBINDS).map_err(|e| {
            CliError::io(format!("Failed to write {}: {e}", keybinds_path.display()))
        })?;

        println!("✓ Created {}", layout_path.display());
        println!("✓ Created {}", keybinds_path.display());
        println!();
        println!("Next steps:");
        println!("  keysheet validate    check the layout's references");
        println!("  keysheet resolve     produce the resolved sheet document");

        Ok(())
    }
}
