//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Command-line client for the Projects service
#[derive(Parser, Debug)]
#[command(name = "project-sdk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Service URL (overrides `<NAME>_URL`)
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Service name used to look up `<NAME>_*` environment variables
    #[arg(long, global = true, default_value = "project")]
    pub service_name: String,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List projects
    ListProjects {
        /// Page size
        #[arg(long)]
        limit: Option<i64>,

        /// Return complete project objects
        #[arg(long)]
        complete: bool,

        /// Follow the next links and print every page
        #[arg(long)]
        all: bool,
    },

    /// Show a project
    GetProject {
        /// Project id
        id: String,
    },

    /// List the configurations of a project
    ListConfigs {
        /// Project id
        id: String,
    },

    /// Show one configuration of a project
    GetConfig {
        /// Project id
        id: String,

        /// Configuration id
        config_id: String,
    },

    /// Check service health
    Health {
        /// Include dependency details
        #[arg(long)]
        info: bool,
    },

    /// Show the service broker catalog
    Catalog,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
    /// YAML
    Yaml,
}
