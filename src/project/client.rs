//! Projects service client
//!
//! `ProjectClient` owns the transport and exposes one async method per
//! service operation. The operations themselves live in the sibling
//! modules, grouped by resource.

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::types::StringMap;
use std::time::Duration;
use tracing::debug;

/// Header carrying the SDK analytics tag
pub const SDK_ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

pub(crate) const JSON: &str = "application/json";
pub(crate) const JSON_PATCH: &str = "application/json-patch+json";

const SERVICE_TAG: &str = "project";
const SERVICE_VERSION: &str = "V1";

/// Client for the Projects service and its service broker endpoints.
///
/// Cloning is cheap: clones share the connection pool and the IAM token
/// cache but carry their own settings afterwards.
#[derive(Debug, Clone)]
pub struct ProjectClient {
    http: HttpClient,
    service_name: String,
}

impl ProjectClient {
    /// Create a client from an explicit configuration
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_auth(config.http_config(), config.auth.clone());
        debug!(
            service = %config.service_name,
            url = %config.service_url,
            auth = config.auth.auth_type(),
            "Created project client"
        );
        Ok(Self {
            http,
            service_name: config.service_name,
        })
    }

    /// Create a client from `<NAME>_*` environment variables
    pub fn from_env(service_name: Option<&str>) -> Result<Self> {
        Self::new(ServiceConfig::from_env(service_name)?)
    }

    /// Regional endpoints are not offered by this service
    pub fn service_url_for_region(region: &str) -> Result<String> {
        Err(Error::invalid_argument(format!(
            "service does not support regional URLs (region '{region}')"
        )))
    }

    /// Name used to look up external configuration
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Base URL requests are sent to
    pub fn service_url(&self) -> &str {
        self.http.config().base_url.as_deref().unwrap_or_default()
    }

    /// Point the client at another service URL
    pub fn set_service_url(&mut self, url: &str) -> Result<()> {
        self.http.set_base_url(url)
    }

    /// Replace the headers sent with every request
    pub fn set_default_headers(&mut self, headers: StringMap) {
        self.http.set_default_headers(headers);
    }

    /// Whether responses are requested gzip-compressed
    pub fn enable_gzip_compression(&self) -> bool {
        self.http.config().enable_gzip
    }

    /// Toggle gzip response compression
    pub fn set_enable_gzip_compression(&mut self, enable: bool) {
        self.http.set_enable_gzip(enable);
    }

    /// Retry failed requests; zero values select the defaults
    pub fn enable_retries(&mut self, max_retries: u32, max_retry_interval: Duration) {
        self.http.enable_retries(max_retries, max_retry_interval);
    }

    /// Turn automatic retries off
    pub fn disable_retries(&mut self) {
        self.http.disable_retries();
    }

    /// Get the underlying transport
    pub fn http_client(&self) -> &HttpClient {
        &self.http
    }

    /// Resolve an operation path against the service URL
    pub(crate) fn url(&self, template: &str, params: &[(&str, &str)]) -> Result<String> {
        self.http.resolve_url(template, params)
    }

    /// Start a request: caller headers first, then the SDK headers
    pub(crate) fn request(&self, operation_id: &str, headers: &StringMap) -> RequestConfig {
        debug!(operation = operation_id, "Preparing request");
        RequestConfig::new()
            .headers(headers)
            .header(SDK_ANALYTICS_HEADER, sdk_analytics(operation_id))
    }
}

/// Value of the analytics header for an operation
pub fn sdk_analytics(operation_id: &str) -> String {
    format!(
        "service_name={};service_version={};operation_id={}",
        SERVICE_TAG, SERVICE_VERSION, operation_id
    )
}
