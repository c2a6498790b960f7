//! CLI command handlers for Keysheet.
//!
//! This module provides headless, scriptable access to the resolution core
//! for automation, testing, and CI/CD integration.

pub mod common;
pub mod init;
pub mod resolve;
pub mod themes;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::ExitCode;
pub use init::InitArgs;
pub use resolve::ResolveArgs;
pub use themes::ThemesArgs;
pub use validate::ValidateArgs;
