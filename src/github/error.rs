//! Error taxonomy for GitHub API operations
//!
//! Every failing call ends up as one [`GitHubError`]. Non-2xx responses carry a
//! human-readable message extracted from the response body: the top-level
//! `message`, followed by the first entry of `errors` when GitHub sends one.

use reqwest::StatusCode;
use serde::Deserialize;

/// Boxed error produced by a [`Transport`](super::transport::Transport)
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used by every client operation
pub type Result<T> = std::result::Result<T, GitHubError>;

#[derive(thiserror::Error, Debug)]
pub enum GitHubError {
    /// The token is missing or was rejected by `GET /user`
    #[error("Invalid API key: {0}")]
    InvalidCredential(String),

    #[error("User {0} not found")]
    UserNotFound(String),

    #[error("{0}")]
    RepositoryCreationFailed(String),

    #[error("{0}")]
    RepositoryDeletionFailed(String),

    /// Non-2xx response not claimed by a more specific kind
    #[error("GitHub API error ({status}): {message}")]
    RemoteApi { status: StatusCode, message: String },

    /// No status code is available: timeout, DNS, refused connection
    #[error("Network failure: {0}")]
    Network(#[source] TransportError),

    /// A 2xx body that does not match the endpoint's schema
    #[error("Unexpected response from GitHub: {0}")]
    UnexpectedResponse(String),

    /// The local HTTP client could not be built
    #[error("Failed to initialize HTTP client: {0}")]
    ClientSetup(#[source] reqwest::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl GitHubError {
    /// Message extracted from the remote error body, if this error has one
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            GitHubError::RepositoryCreationFailed(message)
            | GitHubError::RepositoryDeletionFailed(message)
            | GitHubError::RemoteApi { message, .. } => Some(message),
            _ => None,
        }
    }

    /// HTTP status of a generic remote failure
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GitHubError::RemoteApi { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Re-map a [`GitHubError::RemoteApi`] into an operation-specific kind,
    /// leaving every other variant untouched.
    pub(crate) fn map_remote(self, f: impl FnOnce(StatusCode, String) -> GitHubError) -> Self {
        match self {
            GitHubError::RemoteApi { status, message } => f(status, message),
            other => other,
        }
    }
}

/// Error document returned by GitHub on non-2xx responses
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<ErrorDetail>>,
}

/// One entry of the `errors` list
///
/// Most endpoints send objects (`{"resource", "code", "field", "message"}`),
/// a few send bare strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Text(String),
    Object {
        #[serde(default)]
        message: Option<String>,
    },
}

impl ErrorDetail {
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorDetail::Text(text) => Some(text),
            ErrorDetail::Object { message } => message.as_deref(),
        }
    }
}

impl ErrorBody {
    /// `message`, or `message` + " " + `errors[0].message` when present
    pub fn summary(&self) -> Option<String> {
        let message = self.message.as_deref()?;
        let detail = self
            .errors
            .as_ref()
            .and_then(|errors| errors.first())
            .and_then(ErrorDetail::message);

        Some(match detail {
            Some(detail) => format!("{} {}", message, detail),
            None => message.to_string(),
        })
    }
}

/// Build the human-readable message for a failed response.
///
/// Falls back to the status line's reason phrase when the body carries no
/// usable `message`.
pub fn remote_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.summary())
        .unwrap_or_else(|| match status.canonical_reason() {
            Some(reason) => reason.to_string(),
            None => format!("HTTP {}", status.as_u16()),
        })
}
