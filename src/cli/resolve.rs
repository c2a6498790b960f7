//! Resolve command: produce a self-contained sheet document.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::discovery::find_layout_file;
use crate::icons::IconSet;
use crate::models::{Category, Layout};
use crate::parser::parse_layout_file;
use crate::resolver::resolve_layout;
use crate::sources::FileSourceLoader;
use crate::theme::{resolve_theme, Theme, ThemeError, ThemeLibrary};
use crate::validator::validate_references;
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Resolve a layout into a self-contained sheet document
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Path to layout YAML file (auto-discovered when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Theme to use instead of the layout's choice
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Write the resolved document to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit the document even when reference validation fails
    #[arg(long)]
    pub force: bool,
}

/// Fully resolved sheet document emitted as JSON.
#[derive(Debug, Serialize)]
struct ResolvedDocument {
    title: String,
    template: String,
    theme_name: String,
    output_name: String,
    theme: Theme,
    categories: Vec<Category>,
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self) -> CliResult<()> {
        let layout_path = locate_layout(self.layout.as_deref())?;
        let layout = parse_layout_file(&layout_path)
            .map_err(|e| CliError::io(format!("Failed to load layout: {e:#}")))?;

        let config =
            Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))?;

        let resolved = resolve_sheet(&layout, &layout_path, &config, self.theme.as_deref())?;

        // Reference problems block emission unless forced
        let icons = IconSet::load(config.paths.icons_dir.as_deref())
            .map_err(|e| CliError::io(format!("Failed to load icons: {e:#}")))?;
        let report = validate_references(&resolved.layout, &resolved.theme, &icons);
        if !report.is_valid() && !self.force {
            let message = report.message().unwrap_or_default();
            return Err(CliError::validation(format!(
                "Layout has broken references:\n{message}\n\nUse --force to resolve anyway."
            )));
        }

        let document = ResolvedDocument {
            title: resolved.layout.title.clone(),
            template: resolved.layout.template.clone(),
            theme_name: resolved.theme_name,
            output_name: resolved.layout.output_name.clone(),
            theme: resolved.theme,
            categories: resolved.layout.categories,
        };

        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, json).map_err(|e| {
                    CliError::io(format!("Failed to write {}: {e}", path.display()))
                })?;
                println!("✓ Resolved layout written to {}", path.display());
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}

/// A layout with its sources folded in plus the resolved theme it renders with.
pub struct ResolvedSheet {
    /// The layout, every category self-contained
    pub layout: Layout,
    /// The fully resolved theme
    pub theme: Theme,
    /// Name the theme was requested under
    pub theme_name: String,
}

/// Finds the layout file to operate on.
///
/// An explicit path wins; otherwise discovery walks up from the working
/// directory.
pub fn locate_layout(explicit: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let cwd = std::env::current_dir()
        .map_err(|e| CliError::io(format!("Failed to determine working directory: {e}")))?;

    find_layout_file(&cwd).ok_or_else(|| {
        CliError::io(
            "No layout file found. Create a keysheet.yml or pass one with --layout.".to_string(),
        )
    })
}

/// Resolves sources and theme for a parsed layout.
///
/// Shared by the resolve and validate commands. `theme_override` replaces the
/// layout's own theme choice when given.
pub fn resolve_sheet(
    layout: &Layout,
    layout_path: &Path,
    config: &Config,
    theme_override: Option<&str>,
) -> CliResult<ResolvedSheet> {
    let base_dir = layout_path.parent().unwrap_or_else(|| Path::new("."));
    let loader = FileSourceLoader::new(base_dir);

    let resolved_layout =
        resolve_layout(layout, &loader).map_err(|e| CliError::io(e.to_string()))?;

    let theme_name = theme_override.unwrap_or(&layout.theme).to_string();
    let library = ThemeLibrary::new(config.paths.themes_dir.clone());
    let theme = resolve_theme(&theme_name, &library).map_err(|e| match e {
        ThemeError::Invalid { .. } => CliError::io(e.to_string()),
        ThemeError::NotFound(_) | ThemeError::CircularInheritance(_) => {
            CliError::validation(e.to_string())
        }
    })?;

    Ok(ResolvedSheet {
        layout: resolved_layout,
        theme,
        theme_name,
    })
}
