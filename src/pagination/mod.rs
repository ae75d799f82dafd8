//! Pagination module
//!
//! # Overview
//!
//! Listing endpoints return one page at a time together with a continuation
//! token. `PageCursor` hides that loop: it calls a `ListOperation` with the
//! caller's base options, swaps in the latest token on every call, and stops
//! once the service no longer returns one.
//!
//! ```rust,ignore
//! let mut pager = client.projects_pager(ListProjectsOptions::new().limit(10))?;
//! while pager.has_next() {
//!     for project in pager.next().await? {
//!         println!("{:?}", project.name);
//!     }
//! }
//! ```

mod cursor;
mod types;

pub use cursor::PageCursor;
pub use types::{ListOperation, Page, PageOptions};

#[cfg(test)]
mod tests;
