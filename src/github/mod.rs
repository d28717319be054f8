//! GitHub API integration module
//!
//! This module wraps the handful of GitHub REST endpoints the library needs.
//! Every operation is one blocking round trip followed by status-code driven
//! error mapping.
//!
//! ## Architecture
//!
//! - [`auth`]: Credential sources and the bearer token
//! - [`client`]: `ApiClient` construction, identity resolution and the request helper
//! - [`transport`]: The HTTP seam and its `reqwest` implementation
//! - [`users`]: User information and repository listings
//! - [`repositories`]: Repository creation and deletion
//! - [`types`]: Request and response schemas
//! - [`error`]: Error taxonomy and remote message extraction
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use githubclient::github::{ApiClient, StaticCredentials};
//! use githubclient::ClientConfig;
//!
//! # fn example() -> githubclient::github::Result<()> {
//! let client = ApiClient::with_credentials(
//!     &StaticCredentials::new("your_token"),
//!     ClientConfig::default(),
//! )?;
//!
//! let url = client.create_new_repo("scratch", Some("playground"), true)?;
//! println!("Created {}", url);
//! client.delete_repo("scratch")?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod repositories;
pub mod transport;
pub mod types;
pub mod users;

// Re-export commonly used items for convenience
pub use auth::{Credential, CredentialSource, EnvCredentials, StaticCredentials};
pub use client::ApiClient;
pub use error::{ErrorBody, GitHubError, Result, TransportError};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
pub use types::{NewRepository, UserInfo};
