//! Authentication module
//!
//! Supports: no auth, Basic, Bearer token, IAM API key
//!
//! The `Authenticator` applies credentials to outgoing requests and caches
//! IAM access tokens until shortly before they expire.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CachedToken, DEFAULT_IAM_URL};

#[cfg(test)]
mod tests;
