// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Projects SDK
//!
//! Async Rust client for the Projects service (API version 1.0.0) and the
//! Open Service Broker endpoints it hosts.
//!
//! ## Features
//!
//! - **Every service operation**: projects, configurations, notifications,
//!   Event Notifications integration, broker instances and catalog
//! - **Pagination**: `ProjectsPager` walks the project listing page by page
//!   by following the `next.start` continuation token
//! - **Auth**: no auth, basic, bearer token, or IAM API key with token caching
//! - **Retries**: optional, with exponential backoff and `Retry-After`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use project_sdk::config::ServiceConfig;
//! use project_sdk::project::{ListProjectsOptions, ProjectClient};
//!
//! #[tokio::main]
//! async fn main() -> project_sdk::Result<()> {
//!     let client = ProjectClient::from_env(None)?;
//!
//!     let mut pager = client.projects_pager(ListProjectsOptions::new().limit(10))?;
//!     while pager.has_next() {
//!         for project in pager.next().await? {
//!             println!("{:?}", project.name);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         ProjectClient                           │
//! │  projects · configs · notifications · broker · projects_pager   │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴───────────────┬──────────────────┐
//! │    Config    │             HTTP              │    Pagination    │
//! ├──────────────┼───────────────────────────────┼──────────────────┤
//! │ Builder      │ Path templates  Retry/backoff │ PageCursor       │
//! │ Environment  │ Status mapping  JSON decode   │ ListOperation    │
//! │              │ Auth (IAM/Basic/Bearer)       │                  │
//! └──────────────┴───────────────────────────────┴──────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP transport with retries
pub mod http;

/// Generic page cursor
pub mod pagination;

/// Service configuration
pub mod config;

/// Projects service client
pub mod project;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::ServiceConfig;
pub use pagination::{ListOperation, Page, PageCursor, PageOptions};
pub use project::{ProjectClient, ProjectsPager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
