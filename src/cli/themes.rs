//! Theme listing and inspection commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::theme::{resolve_theme, ThemeError, ThemeLibrary};
use clap::Args;
use serde::Serialize;

/// List available themes or inspect a resolved one
#[derive(Debug, Clone, Args)]
pub struct ThemesArgs {
    /// Print the fully resolved theme with this name as JSON
    #[arg(long, value_name = "NAME")]
    pub resolve: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ThemeItem {
    name: String,
    source: String,
}

#[derive(Debug, Serialize)]
struct ListThemesResponse {
    themes: Vec<ThemeItem>,
    count: usize,
}

impl ThemesArgs {
    /// Execute the themes command
    pub fn execute(&self) -> CliResult<()> {
        let config =
            Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))?;
        let library = ThemeLibrary::new(config.paths.themes_dir.clone());

        if let Some(name) = &self.resolve {
            return resolve_and_print(name, &library);
        }

        let themes: Vec<ThemeItem> = library
            .names()
            .into_iter()
            .map(|name| {
                let source = theme_source(&library, &name);
                ThemeItem { name, source }
            })
            .collect();

        let response = ListThemesResponse {
            count: themes.len(),
            themes,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Available themes ({}):", response.count);
            println!();
            for theme in &response.themes {
                println!("  {:<20} {}", theme.name, theme.source);
            }
        }

        Ok(())
    }
}

fn theme_source(library: &ThemeLibrary, name: &str) -> String {
    let shadowed = library.user_theme_path(name).is_some();
    match (ThemeLibrary::is_builtin(name), shadowed) {
        (true, true) => "user (shadows builtin)".to_string(),
        (false, true) => "user".to_string(),
        _ => "builtin".to_string(),
    }
}

fn resolve_and_print(name: &str, library: &ThemeLibrary) -> CliResult<()> {
    let theme = resolve_theme(name, library).map_err(|e| match e {
        ThemeError::Invalid { .. } => CliError::io(e.to_string()),
        ThemeError::NotFound(_) | ThemeError::CircularInheritance(_) => {
            CliError::validation(e.to_string())
        }
    })?;

    let json = serde_json::to_string_pretty(&theme)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");

    Ok(())
}
