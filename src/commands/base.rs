//! Base trait for the command pattern

use crate::github::{ApiClient, Transport};
use anyhow::Result;
use std::io::Write;

/// Trait that all commands must implement
///
/// Commands receive an already authenticated client and write their
/// human-readable output to `out`.
pub trait Command {
    /// Execute the command against `client`
    fn execute<T: Transport>(&self, client: &ApiClient<T>, out: &mut dyn Write) -> Result<()>;
}
