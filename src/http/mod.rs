//! HTTP client module
//!
//! Provides the HTTP transport used by every service operation.
//!
//! # Features
//!
//! - **Path templates**: `/v1/projects/{id}` resolved with percent-encoding
//! - **Automatic Retries**: Opt-in retry logic with backoff
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Authentication**: Integration with auth module

mod client;

pub use client::{
    resolve_url, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig,
    DEFAULT_MAX_RETRIES, DEFAULT_MAX_RETRY_INTERVAL,
};
