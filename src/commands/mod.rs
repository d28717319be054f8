//! Command implementations for the githubclient binary

pub mod base;
pub mod repositories;
pub mod users;

pub use base::Command;
pub use repositories::{CreateCommand, DeleteCommand};
pub use users::{ReposCommand, UserCommand, WhoamiCommand};
