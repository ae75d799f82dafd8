//! HTTP client with retry and JSON handling
//!
//! Provides the transport every service operation goes through:
//! - Service URL resolution with percent-encoded path parameters
//! - Authentication via the auth module
//! - Optional retries with configurable backoff
//! - Status code to error mapping and JSON decoding

use crate::auth::{AuthConfig, Authenticator};
use crate::error::{is_retryable_status, Error, Result};
use crate::types::{BackoffType, StringMap};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default number of retries when retries are enabled with `0`
pub const DEFAULT_MAX_RETRIES: u32 = 4;

/// Default cap on a single retry delay when retries are enabled with `0`
pub const DEFAULT_MAX_RETRY_INTERVAL: Duration = Duration::from_secs(30);

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries (0 disables retries)
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff
    pub max_backoff: Duration,
    /// Type of backoff strategy
    pub backoff_type: BackoffType,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
    /// Ask for gzip-compressed responses and decompress them transparently
    pub enable_gzip: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(60),
            max_retries: 0,
            initial_backoff: Duration::from_secs(1),
            max_backoff: DEFAULT_MAX_RETRY_INTERVAL,
            backoff_type: BackoffType::Exponential,
            default_headers: StringMap::new(),
            user_agent: default_user_agent(),
            enable_gzip: false,
        }
    }
}

fn default_user_agent() -> String {
    format!(
        "{}/{} (lang=rust; arch={}; os={})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH,
        std::env::consts::OS
    )
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set backoff configuration
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.backoff_type = backoff_type;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Enable gzip response compression
    pub fn gzip(mut self, enable: bool) -> Self {
        self.config.enable_gzip = enable;
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: StringMap,
    /// Request headers
    pub headers: StringMap,
    /// Request body (JSON)
    pub body: Option<Value>,
    /// Override timeout for this request
    pub timeout: Option<Duration>,
    /// Override max retries for this request
    pub max_retries: Option<u32>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter when the value is present
    #[must_use]
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v.to_string()),
            None => self,
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a header when the value is present
    #[must_use]
    pub fn header_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.header(key, v),
            None => self,
        }
    }

    /// Add every header from a map
    #[must_use]
    pub fn headers(mut self, headers: &StringMap) -> Self {
        for (key, value) in headers {
            self.headers.insert(key.clone(), value.clone());
        }
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize a value into the JSON body
    pub fn json_from<T: Serialize + ?Sized>(self, body: &T) -> Result<Self> {
        Ok(self.json(serde_json::to_value(body)?))
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set max retries
    #[must_use]
    pub fn retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }
}

/// HTTP client with authentication and optional retries
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        Self::with_auth(config, AuthConfig::None)
    }

    /// Create a client with authentication
    pub fn with_auth(config: HttpClientConfig, auth_config: AuthConfig) -> Self {
        let client = build_reqwest_client(&config);
        let authenticator = Authenticator::with_client(auth_config, client.clone());
        Self {
            client,
            config,
            authenticator,
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Set the base URL after validating it
    pub fn set_base_url(&mut self, url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(Error::invalid_argument("service URL must not be empty"));
        }
        Url::parse(url)?;
        self.config.base_url = Some(url.to_string());
        Ok(())
    }

    /// Replace the default headers
    pub fn set_default_headers(&mut self, headers: StringMap) {
        self.config.default_headers = headers;
    }

    /// Toggle gzip response compression
    pub fn set_enable_gzip(&mut self, enable: bool) {
        if self.config.enable_gzip != enable {
            self.config.enable_gzip = enable;
            self.client = build_reqwest_client(&self.config);
        }
    }

    /// Enable retries; zero values fall back to the defaults
    pub fn enable_retries(&mut self, max_retries: u32, max_retry_interval: Duration) {
        self.config.max_retries = if max_retries == 0 {
            DEFAULT_MAX_RETRIES
        } else {
            max_retries
        };
        self.config.max_backoff = if max_retry_interval.is_zero() {
            DEFAULT_MAX_RETRY_INTERVAL
        } else {
            max_retry_interval
        };
    }

    /// Disable retries
    pub fn disable_retries(&mut self) {
        self.config.max_retries = 0;
    }

    /// Resolve a path template such as `/v1/projects/{id}` against the base URL
    pub fn resolve_url(&self, template: &str, params: &[(&str, &str)]) -> Result<String> {
        let base = self
            .config
            .base_url
            .as_deref()
            .ok_or_else(|| Error::config("service URL is not set"))?;
        resolve_url(base, template, params)
    }

    /// Make a generic request
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        let full_url = self.build_url(url);
        let max_retries = config.max_retries.unwrap_or(self.config.max_retries);
        let timeout = config.timeout.unwrap_or(self.config.timeout);
        let body = match &config.body {
            Some(body) => Some(serde_json::to_vec(body)?),
            None => None,
        };

        let mut attempt = 0;

        loop {
            let mut req = self.client.request(method.clone(), &full_url);

            for (key, value) in &self.config.default_headers {
                req = req.header(key.as_str(), value.as_str());
            }

            for (key, value) in &config.headers {
                req = req.header(key.as_str(), value.as_str());
            }

            if !config.query.is_empty() {
                req = req.query(&config.query);
            }

            if let Some(ref bytes) = body {
                if !has_header(&config.headers, "content-type") {
                    req = req.header("Content-Type", "application/json");
                }
                req = req.body(bytes.clone());
            }

            req = req.timeout(timeout);
            req = self.authenticator.apply(req).await?;

            debug!("{} {} (attempt {})", method, full_url, attempt + 1);

            match req.send().await {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        debug!("Request succeeded: {} {} -> {}", method, full_url, status);
                        return Ok(response);
                    }

                    if status == StatusCode::TOO_MANY_REQUESTS {
                        if attempt < max_retries {
                            let delay = extract_retry_after(&response)
                                .map_or_else(|| self.calculate_backoff(attempt), |secs| {
                                    std::cmp::min(
                                        Duration::from_secs(secs),
                                        self.config.max_backoff,
                                    )
                                });
                            warn!(
                                "Rate limited (429), attempt {}/{}, waiting {:?}",
                                attempt + 1,
                                max_retries + 1,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                            continue;
                        }
                        let retry_after = extract_retry_after(&response).unwrap_or(0);
                        let body = response.text().await.unwrap_or_default();
                        return Err(Error::rate_limited(retry_after, body));
                    }

                    if is_retryable_status(status.as_u16()) && attempt < max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            "Request failed with {}, attempt {}/{}, retrying in {:?}",
                            status.as_u16(),
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    let body = response.text().await.unwrap_or_default();
                    return Err(Error::http_status(status.as_u16(), body));
                }
                Err(e) => {
                    if e.is_timeout() {
                        if attempt < max_retries {
                            let delay = self.calculate_backoff(attempt);
                            warn!(
                                "Request timeout, attempt {}/{}, retrying in {:?}",
                                attempt + 1,
                                max_retries + 1,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                            continue;
                        }
                        return Err(Error::Timeout {
                            timeout_ms: timeout.as_millis() as u64,
                        });
                    }

                    if e.is_connect() && attempt < max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            "Connection error, attempt {}/{}, retrying in {:?}",
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    return Err(Error::Http(e));
                }
            }
        }
    }

    /// Make a request and parse the JSON response.
    ///
    /// An empty body decodes as `{}`, so result types made of optional
    /// fields come back empty instead of failing.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<T> {
        let response = self.request(method, url, config).await?;
        let text = response.text().await.map_err(Error::Http)?;
        let text = if text.trim().is_empty() { "{}" } else { &text };
        serde_json::from_str(text)
            .map_err(|e| Error::decode(format!("{e} (body: {})", truncate(text, 200))))
    }

    /// Make a request whose response body is ignored
    pub async fn request_empty(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<()> {
        self.request(method, url, config).await?;
        Ok(())
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                format!("{base}/{path}")
            }
            None => path.to_string(),
        }
    }

    /// Calculate backoff delay for a given attempt
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let delay = match self.config.backoff_type {
            BackoffType::Constant => self.config.initial_backoff,
            BackoffType::Linear => self.config.initial_backoff * (attempt + 1),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.config.initial_backoff.saturating_mul(factor)
            }
        };

        std::cmp::min(delay, self.config.max_backoff)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("auth_type", &self.authenticator.config().auth_type())
            .finish_non_exhaustive()
    }
}

fn build_reqwest_client(config: &HttpClientConfig) -> Client {
    Client::builder()
        .timeout(config.timeout)
        .user_agent(&config.user_agent)
        .gzip(config.enable_gzip)
        .build()
        .unwrap_or_else(|e| {
            warn!("Falling back to default HTTP client: {}", e);
            Client::new()
        })
}

/// Resolve a path template against a base URL.
///
/// Each `{name}` segment is replaced by the matching parameter, percent-encoded
/// as a single path segment. Missing or empty parameters are rejected.
pub fn resolve_url(base: &str, template: &str, params: &[(&str, &str)]) -> Result<String> {
    if base.is_empty() {
        return Err(Error::config("service URL is not set"));
    }
    let mut url = Url::parse(base)?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| Error::config(format!("service URL cannot be a base: {base}")))?;
        segments.pop_if_empty();

        for part in template.split('/').filter(|s| !s.is_empty()) {
            match part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
                Some(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| {
                            Error::invalid_argument(format!("missing path parameter '{name}'"))
                        })?;
                    if value.is_empty() {
                        return Err(Error::invalid_argument(format!(
                            "path parameter '{name}' must not be empty"
                        )));
                    }
                    segments.push(value);
                }
                None => {
                    segments.push(part);
                }
            }
        }
    }
    Ok(url.into())
}

fn has_header(headers: &StringMap, name: &str) -> bool {
    headers.keys().any(|k| k.eq_ignore_ascii_case(name))
}

/// Extract retry-after header value
fn extract_retry_after(response: &Response) -> Option<u64> {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
