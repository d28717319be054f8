//! Repository commands: create and delete

use super::Command;
use crate::github::{ApiClient, NewRepository, Transport};
use anyhow::Result;
use colored::*;
use std::io::Write;

/// Create a repository for the token owner
pub struct CreateCommand {
    pub name: String,
    pub description: Option<String>,
    pub private: bool,
}

impl Command for CreateCommand {
    fn execute<T: Transport>(&self, client: &ApiClient<T>, out: &mut dyn Write) -> Result<()> {
        let mut repo = NewRepository::new(&self.name).with_visibility(self.private);
        if let Some(description) = &self.description {
            repo = repo.with_description(description);
        }

        let url = client.create_repo(&repo)?;
        writeln!(
            out,
            "{} | {} {}",
            self.name.cyan().bold(),
            "Repository created:".green(),
            url
        )?;
        Ok(())
    }
}

/// Delete one of the token owner's repositories
pub struct DeleteCommand {
    pub name: String,
}

impl Command for DeleteCommand {
    fn execute<T: Transport>(&self, client: &ApiClient<T>, out: &mut dyn Write) -> Result<()> {
        client.delete_repo(&self.name)?;
        writeln!(
            out,
            "{} | {}",
            format!("{}/{}", client.identity(), self.name).cyan().bold(),
            "Repository deleted".green()
        )?;
        Ok(())
    }
}
