//! githubclient - A minimal client for the GitHub REST API
//!
//! Authenticates with a bearer token, resolves the token owner once, and
//! exposes four operations: user info, repository listing, repository
//! creation and repository deletion.

pub mod commands;
pub mod config;
pub mod constants;
pub mod github;

// Re-export commonly used types
pub use config::ClientConfig;
pub use github::{ApiClient, GitHubError, NewRepository, Result};
