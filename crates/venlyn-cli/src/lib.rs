//! Venlyn CLI library.
//!
//! This library provides the core functionality for the Venlyn command-line
//! interface: configuration management, JSON input loading, command
//! execution, and output formatting. The binary is the "page-level data
//! loader" collaborator of the engines - it resolves the current time once
//! at the edge and passes it down, so everything below stays deterministic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
