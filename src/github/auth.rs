//! Authentication handling and token management
//!
//! A [`Credential`] is loaded once from a [`CredentialSource`] and owned by the
//! client for its whole lifetime. The token never shows up in `Debug` output or
//! logs.

use super::error::{GitHubError, Result};
use crate::constants;
use reqwest::header::HeaderValue;
use std::fmt;

/// Anything that can hand out a bearer token, or report that it has none
pub trait CredentialSource {
    /// Return the token, or `None` when the source has nothing configured
    fn load_token(&self) -> Option<String>;
}

/// Reads the token from an environment variable (`GITHUB_TOKEN` by default)
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the environment variable consulted
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(constants::env::TOKEN_VAR)
    }
}

impl CredentialSource for EnvCredentials {
    fn load_token(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// A token supplied directly, e.g. from a `--token` flag
#[derive(Clone)]
pub struct StaticCredentials {
    token: String,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl CredentialSource for StaticCredentials {
    fn load_token(&self) -> Option<String> {
        Some(self.token.clone())
    }
}

/// Bearer token plus its pre-built `Authorization` header value
#[derive(Clone)]
pub struct Credential {
    token: String,
    header: HeaderValue,
}

impl Credential {
    /// Build a credential from a raw token
    ///
    /// # Errors
    /// Returns [`GitHubError::InvalidCredential`] if the token is blank or
    /// cannot be sent as an HTTP header value.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(GitHubError::InvalidCredential(
                "no API token provided".to_string(),
            ));
        }

        let mut header = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            GitHubError::InvalidCredential(
                "token contains characters not allowed in an HTTP header".to_string(),
            )
        })?;
        header.set_sensitive(true);

        Ok(Self { token, header })
    }

    /// Load a credential from `source`, treating absence like a blank token
    pub fn load(source: &impl CredentialSource) -> Result<Self> {
        Self::new(source.load_token().unwrap_or_default())
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header
    pub fn auth_header(&self) -> &HeaderValue {
        &self.header
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .finish()
    }
}
