//! Tests for pagination module

use super::*;
use crate::error::{Error, Result};
use async_trait::async_trait;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
struct TestOptions {
    start: Option<String>,
    limit: Option<i64>,
}

impl PageOptions for TestOptions {
    fn start_token(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn set_start_token(&mut self, start: Option<String>) {
        self.start = start;
    }
}

/// Replays a fixed script of responses and records every call
#[derive(Clone, Default)]
struct ScriptedListing {
    responses: Arc<Mutex<VecDeque<Result<Page<&'static str>>>>>,
    calls: Arc<Mutex<Vec<TestOptions>>>,
}

impl ScriptedListing {
    fn new(responses: Vec<Result<Page<&'static str>>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            calls: Arc::default(),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn starts(&self) -> Vec<Option<String>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|o| o.start.clone())
            .collect()
    }
}

#[async_trait]
impl ListOperation for ScriptedListing {
    type Options = TestOptions;
    type Item = &'static str;

    async fn list_page(&self, options: &TestOptions) -> Result<Page<&'static str>> {
        self.calls.lock().unwrap().push(options.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Other("script exhausted".to_string())))
    }
}

fn page(items: &[&'static str], next: Option<&str>) -> Result<Page<&'static str>> {
    Ok(Page::new(items.to_vec(), next.map(String::from)))
}

fn server_error() -> Result<Page<&'static str>> {
    Err(Error::http_status(500, "{\"errors\":[{\"message\":\"boom\"}]}"))
}

// ============================================================================
// Page Tests
// ============================================================================

#[test]
fn test_page_new() {
    let page = Page::new(vec![1, 2], Some("tok".to_string()));
    assert_eq!(page.items, vec![1, 2]);
    assert_eq!(page.next_start.as_deref(), Some("tok"));
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_new_cursor_has_next() {
    let listing = ScriptedListing::new(vec![]);
    let cursor = PageCursor::new(listing.clone(), TestOptions::default()).unwrap();

    assert!(cursor.has_next());
    assert_eq!(cursor.next_start(), None);
    assert_eq!(cursor.pages_fetched(), 0);
    assert_eq!(listing.call_count(), 0);
}

#[test]
fn test_new_rejects_preset_start() {
    let listing = ScriptedListing::new(vec![page(&["A"], None)]);
    let options = TestOptions {
        start: Some("abc".to_string()),
        limit: None,
    };

    let err = PageCursor::new(listing.clone(), options).unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(err.to_string().contains("start"));
    assert_eq!(listing.call_count(), 0);
}

#[test]
fn test_new_allows_empty_start() {
    let listing = ScriptedListing::new(vec![]);
    let options = TestOptions {
        start: Some(String::new()),
        limit: None,
    };

    let cursor = PageCursor::new(listing, options).unwrap();
    assert!(cursor.has_next());
}

// ============================================================================
// next Tests
// ============================================================================

#[tokio::test]
async fn test_next_page_follows_tokens() {
    let listing = ScriptedListing::new(vec![page(&["A", "B"], Some("tok1")), page(&["C"], None)]);
    let mut cursor = PageCursor::new(listing.clone(), TestOptions::default()).unwrap();

    assert_eq!(cursor.next().await.unwrap(), vec!["A", "B"]);
    assert!(cursor.has_next());
    assert_eq!(cursor.next_start(), Some("tok1"));

    assert_eq!(cursor.next().await.unwrap(), vec!["C"]);
    assert!(!cursor.has_next());
    assert_eq!(cursor.pages_fetched(), 2);

    assert_eq!(listing.starts(), vec![None, Some("tok1".to_string())]);
}

#[tokio::test]
async fn test_next_page_keeps_base_options() {
    let listing = ScriptedListing::new(vec![page(&["A"], Some("t")), page(&["B"], None)]);
    let options = TestOptions {
        start: None,
        limit: Some(10),
    };
    let mut cursor = PageCursor::new(listing.clone(), options).unwrap();

    cursor.all().await.unwrap();

    let calls = listing.calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|o| o.limit == Some(10)));
}

#[tokio::test]
async fn test_next_page_after_exhaustion() {
    let listing = ScriptedListing::new(vec![page(&["X"], None)]);
    let mut cursor = PageCursor::new(listing.clone(), TestOptions::default()).unwrap();

    assert_eq!(cursor.next().await.unwrap(), vec!["X"]);
    assert!(!cursor.has_next());

    let err = cursor.next().await.unwrap_err();
    assert!(matches!(err, Error::NoMoreResults));
    assert_eq!(listing.call_count(), 1);
}

#[tokio::test]
async fn test_next_page_empty_result() {
    let listing = ScriptedListing::new(vec![page(&[], None)]);
    let mut cursor = PageCursor::new(listing, TestOptions::default()).unwrap();

    let items = cursor.next().await.unwrap();
    assert!(items.is_empty());
    assert!(!cursor.has_next());
}

#[tokio::test]
async fn test_next_page_failure_leaves_state_unchanged() {
    let listing = ScriptedListing::new(vec![
        page(&["A"], Some("tok1")),
        server_error(),
        page(&["B"], None),
    ]);
    let mut cursor = PageCursor::new(listing.clone(), TestOptions::default()).unwrap();

    cursor.next().await.unwrap();

    let err = cursor.next().await.unwrap_err();
    assert_eq!(err.status_code(), Some(500));
    assert!(cursor.has_next());
    assert_eq!(cursor.next_start(), Some("tok1"));
    assert_eq!(cursor.pages_fetched(), 1);

    // Retrying sends the same token again
    assert_eq!(cursor.next().await.unwrap(), vec!["B"]);
    assert_eq!(
        listing.starts(),
        vec![None, Some("tok1".to_string()), Some("tok1".to_string())]
    );
}

#[tokio::test]
async fn test_next_page_empty_token_ends_listing() {
    let listing = ScriptedListing::new(vec![page(&["A"], Some(""))]);
    let mut cursor = PageCursor::new(listing, TestOptions::default()).unwrap();

    cursor.next().await.unwrap();
    assert!(!cursor.has_next());
}

// ============================================================================
// all Tests
// ============================================================================

#[tokio::test]
async fn test_all_concatenates_pages() {
    let listing = ScriptedListing::new(vec![
        page(&["p1a", "p1b"], Some("t1")),
        page(&["p2a"], Some("t2")),
        page(&["p3a", "p3b", "p3c"], None),
    ]);
    let mut cursor = PageCursor::new(listing.clone(), TestOptions::default()).unwrap();

    let items = cursor.all().await.unwrap();

    assert_eq!(items, vec!["p1a", "p1b", "p2a", "p3a", "p3b", "p3c"]);
    assert!(!cursor.has_next());
    assert_eq!(listing.call_count(), 3);
}

#[tokio::test]
async fn test_all_discards_partial_results_on_error() {
    let listing = ScriptedListing::new(vec![page(&["A"], Some("t1")), server_error()]);
    let mut cursor = PageCursor::new(listing, TestOptions::default()).unwrap();

    let err = cursor.all().await.unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    assert!(cursor.has_next());
    assert_eq!(cursor.next_start(), Some("t1"));
}

#[tokio::test]
async fn test_all_on_exhausted_cursor_is_empty() {
    let listing = ScriptedListing::new(vec![page(&["A"], None)]);
    let mut cursor = PageCursor::new(listing.clone(), TestOptions::default()).unwrap();

    cursor.next().await.unwrap();
    let rest = cursor.all().await.unwrap();

    assert!(rest.is_empty());
    assert_eq!(listing.call_count(), 1);
}

#[tokio::test]
async fn test_all_resumes_after_next() {
    let listing = ScriptedListing::new(vec![
        page(&["A"], Some("t1")),
        page(&["B"], Some("t2")),
        page(&["C"], None),
    ]);
    let mut cursor = PageCursor::new(listing, TestOptions::default()).unwrap();

    assert_eq!(cursor.next().await.unwrap(), vec!["A"]);
    assert_eq!(cursor.all().await.unwrap(), vec!["B", "C"]);
}

// ============================================================================
// Stream Tests
// ============================================================================

#[tokio::test]
async fn test_into_stream_yields_pages() {
    let listing = ScriptedListing::new(vec![page(&["A", "B"], Some("t1")), page(&["C"], None)]);
    let cursor = PageCursor::new(listing, TestOptions::default()).unwrap();

    let pages: Vec<_> = cursor.into_stream().collect().await;

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].as_ref().unwrap(), &vec!["A", "B"]);
    assert_eq!(pages[1].as_ref().unwrap(), &vec!["C"]);
}

#[tokio::test]
async fn test_into_stream_stops_after_error() {
    let listing = ScriptedListing::new(vec![
        page(&["A"], Some("t1")),
        server_error(),
        page(&["never"], None),
    ]);
    let cursor = PageCursor::new(listing.clone(), TestOptions::default()).unwrap();

    let pages: Vec<_> = cursor.into_stream().collect().await;

    assert_eq!(pages.len(), 2);
    assert!(pages[1].is_err());
    assert_eq!(listing.call_count(), 2);
}
