//! Pagination types and traits
//!
//! Defines the abstractions a paginated listing has to provide so that
//! `PageCursor` can drive it.

use crate::error::Result;
use async_trait::async_trait;

/// One page returned by a listing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in the order the service returned them
    pub items: Vec<T>,
    /// Continuation token for the following page, `None` on the last page
    pub next_start: Option<String>,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, next_start: Option<String>) -> Self {
        Self { items, next_start }
    }
}

/// Listing options that carry a continuation token
pub trait PageOptions: Clone + Send + Sync {
    /// Current continuation token
    fn start_token(&self) -> Option<&str>;

    /// Replace the continuation token
    fn set_start_token(&mut self, start: Option<String>);
}

/// A paginated listing call
///
/// Implementations issue exactly one request per `list_page` call and
/// report the continuation token of the following page.
#[async_trait]
pub trait ListOperation: Send + Sync {
    /// Query options, including the continuation token
    type Options: PageOptions;

    /// Element type of each page
    type Item: Send;

    /// Fetch the page selected by `options`
    async fn list_page(&self, options: &Self::Options) -> Result<Page<Self::Item>>;
}
