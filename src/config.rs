//! Service configuration
//!
//! `ServiceConfig` carries everything needed to build a service client:
//! where the service lives, how to authenticate, and how the transport
//! behaves. It can be assembled with a builder or read from environment
//! variables prefixed with the upper-cased service name
//! (`PROJECT_URL`, `PROJECT_APIKEY`, ...).

use crate::auth::{AuthConfig, DEFAULT_IAM_URL};
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, DEFAULT_MAX_RETRIES, DEFAULT_MAX_RETRY_INTERVAL};
use crate::types::StringMap;
use std::collections::HashMap;
use std::time::Duration;

/// Default URL of the Projects service
pub const DEFAULT_SERVICE_URL: &str = "https://projects.api.test.cloud.ibm.com";

/// Default key used to find external configuration
pub const DEFAULT_SERVICE_NAME: &str = "project";

/// Complete configuration for a service client
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Name used as the environment variable prefix
    pub service_name: String,
    /// Base URL of the service
    pub service_url: String,
    /// Authentication
    pub auth: AuthConfig,
    /// Transport settings
    pub http: HttpClientConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            service_url: DEFAULT_SERVICE_URL.to_string(),
            auth: AuthConfig::None,
            http: HttpClientConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Create a new config builder
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env(service_name: Option<&str>) -> Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(service_name.unwrap_or(DEFAULT_SERVICE_NAME), &vars)
    }

    /// Load configuration from a map of environment-style variables
    pub fn from_vars(service_name: &str, vars: &HashMap<String, String>) -> Result<Self> {
        let prefix = env_prefix(service_name);
        let get = |suffix: &str| {
            vars.get(&format!("{prefix}_{suffix}"))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self {
            service_name: service_name.to_string(),
            ..Self::default()
        };

        if let Some(url) = get("URL") {
            config.service_url = url;
        }

        config.auth = match get("AUTH_TYPE").map(|t| t.to_ascii_lowercase()) {
            Some(t) if t == "noauth" => AuthConfig::None,
            Some(t) if t == "basic" => AuthConfig::Basic {
                username: get("USERNAME").unwrap_or_default(),
                password: get("PASSWORD").unwrap_or_default(),
            },
            Some(t) if t == "bearertoken" => AuthConfig::Bearer {
                token: get("BEARER_TOKEN").unwrap_or_default(),
            },
            Some(t) if t == "iam" => iam_from_vars(&get),
            Some(other) => {
                return Err(Error::config(format!(
                    "unsupported authentication type '{other}' in {prefix}_AUTH_TYPE"
                )))
            }
            None if get("APIKEY").is_some() => iam_from_vars(&get),
            None => AuthConfig::None,
        };
        config.auth.validate()?;

        if parse_bool(&prefix, "ENABLE_RETRIES", get("ENABLE_RETRIES"))?.unwrap_or(false) {
            let max_retries = parse_number(&prefix, "MAX_RETRIES", get("MAX_RETRIES"))?
                .map_or(DEFAULT_MAX_RETRIES, |n| n as u32);
            let interval = parse_number(&prefix, "RETRY_INTERVAL", get("RETRY_INTERVAL"))?
                .map_or(DEFAULT_MAX_RETRY_INTERVAL, Duration::from_secs);
            config.http.max_retries = if max_retries == 0 {
                DEFAULT_MAX_RETRIES
            } else {
                max_retries
            };
            config.http.max_backoff = if interval.is_zero() {
                DEFAULT_MAX_RETRY_INTERVAL
            } else {
                interval
            };
        }

        if let Some(gzip) = parse_bool(&prefix, "ENABLE_GZIP", get("ENABLE_GZIP"))? {
            config.http.enable_gzip = gzip;
        }

        Ok(config)
    }

    /// Check the configuration before building a client
    pub fn validate(&self) -> Result<()> {
        if self.service_url.is_empty() {
            return Err(Error::config("service URL must not be empty"));
        }
        url::Url::parse(&self.service_url)?;
        self.auth.validate()
    }

    /// Transport config with the service URL filled in
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            base_url: Some(self.service_url.clone()),
            ..self.http.clone()
        }
    }
}

fn iam_from_vars(get: &impl Fn(&str) -> Option<String>) -> AuthConfig {
    AuthConfig::Iam {
        apikey: get("APIKEY").unwrap_or_default(),
        url: get("AUTH_URL").unwrap_or_else(|| DEFAULT_IAM_URL.to_string()),
        client_id: get("CLIENT_ID"),
        client_secret: get("CLIENT_SECRET"),
        scope: get("SCOPE"),
    }
}

/// `my-service` -> `MY_SERVICE`
fn env_prefix(service_name: &str) -> String {
    service_name.to_ascii_uppercase().replace('-', "_")
}

fn parse_bool(prefix: &str, suffix: &str, value: Option<String>) -> Result<Option<bool>> {
    value
        .map(|v| match v.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(Error::invalid_config_value(
                format!("{prefix}_{suffix}"),
                format!("expected a boolean, got '{v}'"),
            )),
        })
        .transpose()
}

fn parse_number(prefix: &str, suffix: &str, value: Option<String>) -> Result<Option<u64>> {
    value
        .map(|v| {
            v.parse::<u64>().map_err(|e| {
                Error::invalid_config_value(format!("{prefix}_{suffix}"), e.to_string())
            })
        })
        .transpose()
}

/// Builder for service config
#[derive(Default)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    /// Set the service name
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.config.service_name = name.into();
        self
    }

    /// Set the service URL
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.config.service_url = url.into();
        self
    }

    /// Set the authentication
    pub fn auth(mut self, auth: AuthConfig) -> Self {
        self.config.auth = auth;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http.timeout = timeout;
        self
    }

    /// Enable retries; zero values fall back to the defaults
    pub fn retries(mut self, max_retries: u32, max_retry_interval: Duration) -> Self {
        self.config.http.max_retries = if max_retries == 0 {
            DEFAULT_MAX_RETRIES
        } else {
            max_retries
        };
        self.config.http.max_backoff = if max_retry_interval.is_zero() {
            DEFAULT_MAX_RETRY_INTERVAL
        } else {
            max_retry_interval
        };
        self
    }

    /// Set the delay before the first retry
    pub fn initial_backoff(mut self, delay: Duration) -> Self {
        self.config.http.initial_backoff = delay;
        self
    }

    /// Add a header sent with every request
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.http.default_headers.insert(key.into(), value.into());
        self
    }

    /// Replace the default headers
    pub fn headers(mut self, headers: StringMap) -> Self {
        self.config.http.default_headers = headers;
        self
    }

    /// Enable gzip response compression
    pub fn gzip(mut self, enable: bool) -> Self {
        self.config.http.enable_gzip = enable;
        self
    }

    /// Build the config
    pub fn build(self) -> ServiceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.service_name, "project");
        assert_eq!(config.service_url, DEFAULT_SERVICE_URL);
        assert_eq!(config.auth, AuthConfig::None);
        assert_eq!(config.http.max_retries, 0);
    }

    #[test]
    fn test_builder() {
        let config = ServiceConfig::builder()
            .service_url("https://example.com")
            .auth(AuthConfig::bearer("tok"))
            .retries(3, Duration::from_secs(10))
            .header("X-Test", "1")
            .gzip(true)
            .build();

        assert_eq!(config.service_url, "https://example.com");
        assert_eq!(config.http.max_retries, 3);
        assert_eq!(config.http.max_backoff, Duration::from_secs(10));
        assert!(config.http.enable_gzip);
        assert_eq!(
            config.http_config().base_url.as_deref(),
            Some("https://example.com")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_retries_zero_uses_defaults() {
        let config = ServiceConfig::builder().retries(0, Duration::ZERO).build();
        assert_eq!(config.http.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(config.http.max_backoff, DEFAULT_MAX_RETRY_INTERVAL);

        let config = ServiceConfig::builder().retries(2, Duration::ZERO).build();
        assert_eq!(config.http.max_retries, 2);
        assert_eq!(config.http.max_backoff, DEFAULT_MAX_RETRY_INTERVAL);
    }

    #[test]
    fn test_from_vars_empty_uses_defaults() {
        let config = ServiceConfig::from_vars("project", &HashMap::new()).unwrap();
        assert_eq!(config.service_url, DEFAULT_SERVICE_URL);
        assert_eq!(config.auth, AuthConfig::None);
    }

    #[test]
    fn test_from_vars_iam() {
        let config = ServiceConfig::from_vars(
            "project",
            &vars(&[
                ("PROJECT_URL", "https://projects.example.com"),
                ("PROJECT_AUTH_TYPE", "iam"),
                ("PROJECT_APIKEY", "my-key"),
                ("PROJECT_AUTH_URL", "https://iam.example.com"),
            ]),
        )
        .unwrap();

        assert_eq!(config.service_url, "https://projects.example.com");
        assert_eq!(
            config.auth,
            AuthConfig::Iam {
                apikey: "my-key".to_string(),
                url: "https://iam.example.com".to_string(),
                client_id: None,
                client_secret: None,
                scope: None,
            }
        );
    }

    #[test]
    fn test_from_vars_apikey_implies_iam() {
        let config =
            ServiceConfig::from_vars("project", &vars(&[("PROJECT_APIKEY", "k")])).unwrap();
        assert_eq!(config.auth.auth_type(), "iam");
    }

    #[test]
    fn test_from_vars_service_name_prefix() {
        let config = ServiceConfig::from_vars(
            "my-projects",
            &vars(&[
                ("MY_PROJECTS_AUTH_TYPE", "bearerToken"),
                ("MY_PROJECTS_BEARER_TOKEN", "abc"),
            ]),
        )
        .unwrap();
        assert_eq!(config.auth, AuthConfig::bearer("abc"));
        assert_eq!(config.service_name, "my-projects");
    }

    #[test]
    fn test_from_vars_basic_requires_credentials() {
        let result =
            ServiceConfig::from_vars("project", &vars(&[("PROJECT_AUTH_TYPE", "basic")]));
        assert!(matches!(result, Err(Error::Auth { .. })));
    }

    #[test]
    fn test_from_vars_unknown_auth_type() {
        let result =
            ServiceConfig::from_vars("project", &vars(&[("PROJECT_AUTH_TYPE", "kerberos")]));
        match result {
            Err(Error::Config { message }) => {
                assert!(message.contains("kerberos"));
                assert!(message.contains("PROJECT_AUTH_TYPE"));
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_vars_retries_and_gzip() {
        let config = ServiceConfig::from_vars(
            "project",
            &vars(&[
                ("PROJECT_ENABLE_RETRIES", "true"),
                ("PROJECT_MAX_RETRIES", "2"),
                ("PROJECT_RETRY_INTERVAL", "5"),
                ("PROJECT_ENABLE_GZIP", "true"),
            ]),
        )
        .unwrap();
        assert_eq!(config.http.max_retries, 2);
        assert_eq!(config.http.max_backoff, Duration::from_secs(5));
        assert!(config.http.enable_gzip);
    }

    #[test]
    fn test_from_vars_retries_defaults() {
        let config =
            ServiceConfig::from_vars("project", &vars(&[("PROJECT_ENABLE_RETRIES", "1")]))
                .unwrap();
        assert_eq!(config.http.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(config.http.max_backoff, DEFAULT_MAX_RETRY_INTERVAL);
    }

    #[test]
    fn test_from_vars_bad_number() {
        let result = ServiceConfig::from_vars(
            "project",
            &vars(&[
                ("PROJECT_ENABLE_RETRIES", "true"),
                ("PROJECT_MAX_RETRIES", "many"),
            ]),
        );
        match result {
            Err(Error::Config { message }) => {
                assert!(message.contains("kerberos"));
                assert!(message.contains("PROJECT_AUTH_TYPE"));
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = ServiceConfig::builder().service_url("nope").build();
        assert!(config.validate().is_err());
        let config = ServiceConfig::builder().service_url("").build();
        assert!(config.validate().is_err());
    }
}
