//! Auth configuration types

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::fmt;

/// Default IAM token service
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

/// Authentication configuration
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Caller-managed bearer token
    Bearer {
        /// The bearer token
        token: String,
    },

    /// IAM API key exchanged for short-lived access tokens
    Iam {
        /// The API key
        apikey: String,
        /// Token service base URL (`/identity/token` is appended)
        url: String,
        /// Optional client ID for the token request
        client_id: Option<String>,
        /// Optional client secret for the token request
        client_secret: Option<String>,
        /// Optional scope
        scope: Option<String>,
    },
}

impl AuthConfig {
    /// Basic auth
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Bearer token auth
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// IAM auth against the default token service
    pub fn iam(apikey: impl Into<String>) -> Self {
        Self::Iam {
            apikey: apikey.into(),
            url: DEFAULT_IAM_URL.to_string(),
            client_id: None,
            client_secret: None,
            scope: None,
        }
    }

    /// Short name matching the `*_AUTH_TYPE` environment value
    pub fn auth_type(&self) -> &'static str {
        match self {
            Self::None => "noauth",
            Self::Basic { .. } => "basic",
            Self::Bearer { .. } => "bearerToken",
            Self::Iam { .. } => "iam",
        }
    }

    /// Check that the required credentials are present
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::None => Ok(()),
            Self::Basic { username, password } => {
                if username.is_empty() || password.is_empty() {
                    return Err(Error::auth("username and password must not be empty"));
                }
                if has_braces_or_quotes(username) || has_braces_or_quotes(password) {
                    return Err(Error::auth(
                        "username and password must not contain braces or quotes",
                    ));
                }
                Ok(())
            }
            Self::Bearer { token } => {
                if token.is_empty() {
                    return Err(Error::auth("bearer token must not be empty"));
                }
                Ok(())
            }
            Self::Iam {
                apikey,
                client_id,
                client_secret,
                ..
            } => {
                if apikey.is_empty() {
                    return Err(Error::auth("IAM apikey must not be empty"));
                }
                if has_braces_or_quotes(apikey) {
                    return Err(Error::auth("IAM apikey must not contain braces or quotes"));
                }
                if client_id.is_some() != client_secret.is_some() {
                    return Err(Error::auth(
                        "IAM client_id and client_secret must be set together",
                    ));
                }
                Ok(())
            }
        }
    }
}

fn has_braces_or_quotes(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.starts_with('{')
        || trimmed.ends_with('}')
        || trimmed.starts_with('"')
        || trimmed.ends_with('"')
}

// Credentials stay out of logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .finish_non_exhaustive(),
            Self::Bearer { .. } => f.debug_struct("Bearer").finish_non_exhaustive(),
            Self::Iam { url, client_id, .. } => f
                .debug_struct("Iam")
                .field("url", url)
                .field("client_id", client_id)
                .finish_non_exhaustive(),
        }
    }
}

/// Cached token with expiration
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a new cached token
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// Create a token that expires in N seconds from now
    pub fn expires_in(token: String, seconds: i64) -> Self {
        let expires_at = Utc::now() + chrono::Duration::seconds(seconds);
        Self {
            token,
            expires_at: Some(expires_at),
        }
    }

    /// Check if the token is expired (with 30 second buffer)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let buffer = chrono::Duration::seconds(30);
                Utc::now() + buffer >= expires_at
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_cached_token_not_expired() {
        let token = CachedToken::expires_in("test".to_string(), 3600);
        assert!(!token.is_expired());
    }

    #[test]
    fn test_cached_token_expired() {
        let token = CachedToken::expires_in("test".to_string(), -100);
        assert!(token.is_expired());
    }

    #[test]
    fn test_cached_token_no_expiration() {
        let token = CachedToken::new("test".to_string(), None);
        assert!(!token.is_expired());
    }

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert!(matches!(config, AuthConfig::None));
        assert_eq!(config.auth_type(), "noauth");
    }

    #[test]
    fn test_validate_rejects_empty_credentials() {
        assert!(AuthConfig::basic("", "pw").validate().is_err());
        assert!(AuthConfig::bearer("").validate().is_err());
        assert!(AuthConfig::iam("").validate().is_err());
        assert!(AuthConfig::iam("{apikey}").validate().is_err());
        assert!(AuthConfig::iam("my-key").validate().is_ok());
    }

    #[test]
    fn test_validate_iam_client_pair() {
        let config = AuthConfig::Iam {
            apikey: "key".to_string(),
            url: DEFAULT_IAM_URL.to_string(),
            client_id: Some("bx".to_string()),
            client_secret: None,
            scope: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let rendered = format!("{:?}", AuthConfig::basic("alice", "hunter2"));
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));

        let rendered = format!("{:?}", AuthConfig::iam("secret-key"));
        assert!(!rendered.contains("secret-key"));
    }
}
