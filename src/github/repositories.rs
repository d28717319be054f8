//! GitHub Repository API operations
//!
//! Creation and deletion act on the account that owns the token. Unlike the
//! user lookups, both require one exact success status: `201 Created` and
//! `204 No Content` respectively.

use super::client::ApiClient;
use super::error::{GitHubError, Result, remote_message};
use super::transport::{ApiRequest, Transport, path_segment};
use super::types::{CreatedRepository, NewRepository};
use reqwest::StatusCode;
use tracing::info;

impl<T: Transport> ApiClient<T> {
    /// Create a repository for the token owner
    ///
    /// # Arguments
    /// * `name` - Repository name, must not be empty
    /// * `description` - Optional description, sent as `null` when absent
    /// * `private` - Visibility of the new repository
    ///
    /// # Returns
    /// The `html_url` of the created repository
    ///
    /// # Errors
    /// Returns [`GitHubError::RepositoryCreationFailed`] carrying GitHub's
    /// message, e.g. `"Repository creation failed. name already exists on this account"`.
    pub fn create_new_repo(
        &self,
        name: &str,
        description: Option<&str>,
        private: bool,
    ) -> Result<String> {
        let mut repo = NewRepository::new(name).with_visibility(private);
        if let Some(description) = description {
            repo = repo.with_description(description);
        }
        self.create_repo(&repo)
    }

    /// Create a repository from a [`NewRepository`] descriptor
    pub fn create_repo(&self, repo: &NewRepository) -> Result<String> {
        if repo.name.trim().is_empty() {
            return Err(GitHubError::RepositoryCreationFailed(
                "Repository name must not be empty".to_string(),
            ));
        }

        let request = ApiRequest::post("/user/repos")
            .authorized(self.credential())
            .with_json(repo)?;

        let response = self.send(request).map_err(|e| {
            e.map_remote(|_, message| GitHubError::RepositoryCreationFailed(message))
        })?;

        if response.status != StatusCode::CREATED {
            return Err(GitHubError::RepositoryCreationFailed(remote_message(
                response.status,
                &response.body,
            )));
        }

        let created: CreatedRepository = response.json()?;
        info!(name = %repo.name, url = %created.html_url, "created repository");
        Ok(created.html_url)
    }

    /// Delete one of the token owner's repositories
    ///
    /// `name` is percent-encoded as a single path segment, so it can never
    /// address a repository outside the token owner's account.
    ///
    /// # Returns
    /// `true` once GitHub answers `204 No Content`
    pub fn delete_repo(&self, name: &str) -> Result<bool> {
        if name.trim().is_empty() {
            return Err(GitHubError::RepositoryDeletionFailed(
                "Repository name must not be empty".to_string(),
            ));
        }

        let deletion_failed = |message: String| {
            GitHubError::RepositoryDeletionFailed(format!(
                "Repository {} deletion failed. {}",
                name, message
            ))
        };

        let (Some(owner), Some(repo)) = (path_segment(self.identity()), path_segment(name)) else {
            return Err(deletion_failed("Invalid repository name".to_string()));
        };

        let request =
            ApiRequest::delete(format!("/repos/{}/{}", owner, repo)).authorized(self.credential());

        let response = self
            .send(request)
            .map_err(|e| e.map_remote(|_, message| deletion_failed(message)))?;

        if response.status != StatusCode::NO_CONTENT {
            return Err(deletion_failed(remote_message(
                response.status,
                &response.body,
            )));
        }

        info!(owner = %self.identity(), name = %name, "deleted repository");
        Ok(true)
    }
}
