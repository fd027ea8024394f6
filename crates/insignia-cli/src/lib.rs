//! Insignia CLI Library
//!
//! Command-line interface for the Insignia badge generator.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod commands;
mod config;
mod error;
pub mod handlers;

pub use commands::{Cli, ClassifyArgs, ColorArg, Commands, GenerateArgs, StyleArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
