//! GitHub API client implementation
//!
//! This module provides the main `ApiClient` struct which serves as the entry point
//! for all GitHub API operations. The client owns the credential, the transport and
//! the login of the token owner, which is resolved once during construction.
//!
//! ## Architecture
//!
//! Operations are grouped into separate modules that extend `ApiClient` with
//! `impl` blocks:
//! - `users.rs` - User information and repository listings
//! - `repositories.rs` - Repository creation and deletion
//!
//! All of them go through [`ApiClient::send`], which performs one round trip and
//! turns every non-2xx status into a [`GitHubError::RemoteApi`].

use super::auth::{Credential, CredentialSource, EnvCredentials};
use super::error::{GitHubError, Result, remote_message};
use super::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
use super::types::AuthenticatedUser;
use crate::config::ClientConfig;
use reqwest::StatusCode;
use tracing::{debug, info};

/// GitHub API client bound to one token and its owner
///
/// ## Example
///
/// ```rust,no_run
/// use githubclient::github::ApiClient;
///
/// # fn example() -> githubclient::github::Result<()> {
/// // Reads GITHUB_TOKEN and resolves the token owner
/// let client = ApiClient::new()?;
/// println!("Authenticated as {}", client.identity());
///
/// for name in client.get_user_repos("octocat")? {
///     println!("{}", name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ApiClient<T: Transport = HttpTransport> {
    transport: T,
    credential: Credential,
    identity: String,
}

impl ApiClient {
    /// Create a client from `GITHUB_TOKEN` and the environment configuration
    ///
    /// # Errors
    /// - [`GitHubError::InvalidCredential`] if no token is set or GitHub rejects it
    /// - [`GitHubError::Network`] if GitHub cannot be reached
    pub fn new() -> Result<Self> {
        Self::with_credentials(&EnvCredentials::default(), ClientConfig::from_env())
    }

    /// Create a client with an explicit credential source and configuration
    pub fn with_credentials(source: &impl CredentialSource, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(source, transport)
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a client on top of an arbitrary transport
    ///
    /// Loads the credential and performs the single `GET /user` identity lookup.
    /// A missing token fails before any request is made.
    pub fn with_transport(source: &impl CredentialSource, transport: T) -> Result<Self> {
        let credential = Credential::load(source)?;
        let identity = resolve_identity(&transport, &credential)?;
        info!(login = %identity, "resolved GitHub token owner");

        Ok(Self {
            transport,
            credential,
            identity,
        })
    }

    /// Login of the token owner
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub(crate) fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Perform one round trip; non-2xx becomes [`GitHubError::RemoteApi`]
    pub(crate) fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        dispatch(&self.transport, &request)
    }
}

fn dispatch<T: Transport + ?Sized>(transport: &T, request: &ApiRequest) -> Result<ApiResponse> {
    let response = transport.execute(request).map_err(|e| {
        debug!(
            method = %request.method,
            path = %request.path,
            error = %e,
            "GitHub API request failed"
        );
        GitHubError::Network(e)
    })?;

    debug!(
        method = %request.method,
        path = %request.path,
        status = response.status.as_u16(),
        "GitHub API request"
    );

    if response.status.is_success() {
        Ok(response)
    } else {
        Err(GitHubError::RemoteApi {
            status: response.status,
            message: remote_message(response.status, &response.body),
        })
    }
}

fn resolve_identity<T: Transport>(transport: &T, credential: &Credential) -> Result<String> {
    let request = ApiRequest::get("/user").authorized(credential);

    let response = dispatch(transport, &request).map_err(|e| {
        e.map_remote(|status, message| {
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                GitHubError::InvalidCredential(message)
            } else {
                GitHubError::RemoteApi { status, message }
            }
        })
    })?;

    let user: AuthenticatedUser = response.json()?;
    Ok(user.login)
}
