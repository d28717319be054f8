//! GitHub User API operations
//!
//! Both lookups are unauthenticated and report any non-2xx status as
//! [`GitHubError::UserNotFound`].

use super::client::ApiClient;
use super::error::{GitHubError, Result};
use super::transport::{ApiRequest, Transport, path_segment};
use super::types::{RepositorySummary, UserInfo};

impl<T: Transport> ApiClient<T> {
    /// Get the public profile of a user
    ///
    /// # Arguments
    /// * `username` - GitHub login, not validated client-side
    ///
    /// # Returns
    /// The decoded `GET /users/{username}` body, unmodified
    ///
    /// # Example
    /// ```rust,no_run
    /// use githubclient::github::ApiClient;
    ///
    /// # fn example() -> githubclient::github::Result<()> {
    /// let client = ApiClient::new()?;
    /// let info = client.get_user_info("octocat")?;
    /// println!("{} has {} followers", info["login"], info["followers"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_user_info(&self, username: &str) -> Result<UserInfo> {
        let login = login_segment(username)?;
        let response = self
            .send(ApiRequest::get(format!("/users/{}", login)))
            .map_err(|e| user_not_found(e, username))?;

        response.json()
    }

    /// List the names of a user's repositories, in the order GitHub returns them
    pub fn get_user_repos(&self, username: &str) -> Result<Vec<String>> {
        let login = login_segment(username)?;
        let response = self
            .send(ApiRequest::get(format!("/users/{}/repos", login)))
            .map_err(|e| user_not_found(e, username))?;

        let repos: Vec<RepositorySummary> = response.json()?;
        Ok(repos.into_iter().map(|repo| repo.name).collect())
    }
}

/// `.` and `..` can never name a user
fn login_segment(username: &str) -> Result<String> {
    path_segment(username).ok_or_else(|| GitHubError::UserNotFound(username.to_string()))
}

fn user_not_found(error: GitHubError, username: &str) -> GitHubError {
    error.map_remote(|_, _| GitHubError::UserNotFound(username.to_string()))
}
