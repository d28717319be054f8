//! Central constants for the githubclient library

/// Default values for GitHub API access
pub mod github {
    use std::time::Duration;

    /// GitHub API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("githubclient/", env!("CARGO_PKG_VERSION"));

    /// Media type requested on every call
    pub const ACCEPT: &str = "application/vnd.github+json";

    /// Upper bound for a single request round trip
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(1);
}

/// Environment variables read by the library and the CLI
pub mod env {
    /// Bearer token for the authenticated endpoints
    pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

    /// Overrides the API base URL (GitHub Enterprise, local mocks)
    pub const API_URL_VAR: &str = "GITHUB_API_URL";

    /// Overrides the request timeout, in whole seconds
    pub const TIMEOUT_VAR: &str = "GITHUB_TIMEOUT_SECS";
}
