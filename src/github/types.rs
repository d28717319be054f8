//! Request and response schemas for the endpoints the client uses

use serde::{Deserialize, Serialize};

/// User record from `GET /users/{username}`, passed through untouched
pub type UserInfo = serde_json::Value;

/// Subset of `GET /user` needed to resolve the token owner
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub login: String,
}

/// One element of `GET /users/{username}/repos`
#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
}

/// Response of `POST /user/repos`
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedRepository {
    pub html_url: String,
}

/// Input for repository creation, also the `POST /user/repos` body
///
/// An absent description is sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRepository {
    pub name: String,
    pub description: Option<String>,
    pub private: bool,
}

impl NewRepository {
    /// Public repository without description
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            private: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_visibility(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn as_private(mut self) -> Self {
        self.private = true;
        self
    }
}
