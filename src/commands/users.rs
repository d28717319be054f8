//! User-related commands: whoami, user info and repository listing

use super::Command;
use crate::github::{ApiClient, Transport};
use anyhow::Result;
use colored::*;
use std::io::Write;

/// Print the login of the token owner
pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn execute<T: Transport>(&self, client: &ApiClient<T>, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", client.identity())?;
        Ok(())
    }
}

/// Print a user's profile as pretty JSON
pub struct UserCommand {
    pub username: String,
}

impl Command for UserCommand {
    fn execute<T: Transport>(&self, client: &ApiClient<T>, out: &mut dyn Write) -> Result<()> {
        let info = client.get_user_info(&self.username)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
        Ok(())
    }
}

/// Print one repository name per line
pub struct ReposCommand {
    pub username: String,
}

impl Command for ReposCommand {
    fn execute<T: Transport>(&self, client: &ApiClient<T>, out: &mut dyn Write) -> Result<()> {
        let names = client.get_user_repos(&self.username)?;

        if names.is_empty() {
            writeln!(
                out,
                "{}",
                format!("No repositories found for {}", self.username).yellow()
            )?;
            return Ok(());
        }

        for name in names {
            writeln!(out, "{}", name)?;
        }
        Ok(())
    }
}
