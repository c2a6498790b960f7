//! Keysheet - Keyboard shortcut cheatsheet resolver
//!
//! Command-line front end over the resolution core: merges keybind sources
//! into layout categories, resolves theme inheritance, and validates theme
//! color and icon references.

use clap::{Parser, Subcommand};
use keysheet::cli::{InitArgs, ResolveArgs, ThemesArgs, ValidateArgs};

/// Keysheet - Keyboard shortcut cheatsheet resolver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command to run
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a layout into a self-contained sheet document
    Resolve(ResolveArgs),
    /// Validate a layout's theme color and icon references
    Validate(ValidateArgs),
    /// List available themes or inspect a resolved one
    Themes(ThemesArgs),
    /// Create a starter layout in a directory
    Init(InitArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Resolve(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::Themes(args) => args.execute(),
        Commands::Init(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code().code());
    }
}
