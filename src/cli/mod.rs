//! CLI module
//!
//! Command-line interface over the Projects client.
//!
//! # Commands
//!
//! - `list-projects` - List projects, one page or `--all`
//! - `get-project` - Show a project
//! - `list-configs` / `get-config` - Inspect project configurations
//! - `health` - Service health
//! - `catalog` - Service broker catalog

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{render, Runner};
