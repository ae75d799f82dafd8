//! Cursor that walks a paginated listing one page at a time

use super::types::{ListOperation, PageOptions};
use crate::error::{Error, Result};
use futures::stream::{self, Stream};
use tracing::debug;

/// Forward-only cursor over a `ListOperation`.
///
/// The cursor owns a copy of the base options and only ever changes their
/// continuation token. State advances only when a page has been fetched
/// successfully, so a failed `next` can simply be retried.
pub struct PageCursor<L: ListOperation> {
    operation: L,
    options: L::Options,
    next_start: Option<String>,
    has_next: bool,
    pages_fetched: usize,
}

impl<L: ListOperation> PageCursor<L> {
    /// Create a cursor positioned before the first page.
    ///
    /// Fails with `InvalidArgument` if `options` already carries a
    /// continuation token.
    pub fn new(operation: L, options: L::Options) -> Result<Self> {
        if options.start_token().is_some_and(|s| !s.is_empty()) {
            return Err(Error::invalid_argument(
                "the 'start' field should not be set",
            ));
        }

        Ok(Self {
            operation,
            options,
            next_start: None,
            has_next: true,
            pages_fetched: 0,
        })
    }

    /// Check if more results may exist
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Token that will be sent with the next request
    pub fn next_start(&self) -> Option<&str> {
        self.next_start.as_deref()
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Fetch the next page of results
    pub async fn next(&mut self) -> Result<Vec<L::Item>> {
        if !self.has_next {
            return Err(Error::NoMoreResults);
        }

        let mut options = self.options.clone();
        options.set_start_token(self.next_start.clone());

        let page = self.operation.list_page(&options).await?;

        // An empty token would restart the listing from the beginning
        self.next_start = page.next_start.filter(|s| !s.is_empty());
        self.has_next = self.next_start.is_some();
        self.pages_fetched += 1;

        debug!(
            page = self.pages_fetched,
            items = page.items.len(),
            has_next = self.has_next,
            "Fetched page"
        );

        Ok(page.items)
    }

    /// Fetch every remaining page and concatenate the results.
    ///
    /// On failure the error of the failing page is returned and the items
    /// collected so far are dropped.
    pub async fn all(&mut self) -> Result<Vec<L::Item>> {
        let mut all_items = Vec::new();
        while self.has_next() {
            let page = self.next().await?;
            all_items.extend(page);
        }
        Ok(all_items)
    }

    /// Turn the cursor into a stream of pages.
    ///
    /// The stream ends after the last page or after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<L::Item>>> {
        stream::unfold(Some(self), |state| async move {
            let mut cursor = state?;
            if !cursor.has_next() {
                return None;
            }
            match cursor.next().await {
                Ok(items) => Some((Ok(items), Some(cursor))),
                Err(e) => Some((Err(e), None)),
            }
        })
    }
}

impl<L: ListOperation> std::fmt::Debug for PageCursor<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageCursor")
            .field("has_next", &self.has_next)
            .field("next_start", &self.next_start)
            .field("pages_fetched", &self.pages_fetched)
            .finish_non_exhaustive()
    }
}
