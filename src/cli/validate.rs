//! Validation command for layout files.

use crate::cli::common::{
    CliError, CliResult, ValidationChecks, ValidationMessage, ValidationResponse,
};
use crate::cli::resolve::{locate_layout, resolve_sheet};
use crate::config::Config;
use crate::icons::IconSet;
use crate::parser::parse_layout_file;
use crate::validator::{validate_references, ReferenceViolation};
use clap::Args;
use std::path::PathBuf;

/// Validate a layout's theme color and icon references
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to layout YAML file (auto-discovered when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Theme to validate against instead of the layout's choice
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let layout_path = locate_layout(self.layout.as_deref())?;
        let layout = parse_layout_file(&layout_path)
            .map_err(|e| CliError::io(format!("Failed to load layout: {e:#}")))?;

        let config =
            Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))?;

        let resolved = resolve_sheet(&layout, &layout_path, &config, self.theme.as_deref())?;

        let icons = IconSet::load(config.paths.icons_dir.as_deref())
            .map_err(|e| CliError::io(format!("Failed to load icons: {e:#}")))?;
        let report = validate_references(&resolved.layout, &resolved.theme, &icons);

        // Build response
        let mut checks = ValidationChecks::all_passed();
        let mut messages = Vec::new();

        for violation in report.violations() {
            let kind = match violation {
                ReferenceViolation::UnknownThemeColor { .. } => {
                    checks.colors = "failed".to_string();
                    "color"
                }
                ReferenceViolation::UnknownIcon { .. } => {
                    checks.icons = "failed".to_string();
                    "icon"
                }
            };

            messages.push(ValidationMessage {
                severity: "error".to_string(),
                kind: kind.to_string(),
                message: violation.to_string(),
            });
        }

        let response = ValidationResponse {
            valid: report.is_valid(),
            errors: messages,
            checks,
        };

        // Output results
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            if response.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }

            println!("\nChecks:");
            println!("  Theme colors: {}", response.checks.colors);
            println!("  Icons:        {}", response.checks.icons);

            if !response.errors.is_empty() {
                println!("\nIssues:");
                for message in &response.errors {
                    println!("  ✗ {}", message.message);
                }
            }
        }

        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        Ok(())
    }
}
