use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use githubclient::commands::*;
use githubclient::github::{ApiClient, EnvCredentials, StaticCredentials};
use githubclient::{ClientConfig, constants};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "githubclient")]
#[command(about = "A small client for the GitHub REST API")]
#[command(version)]
struct Cli {
    /// GitHub token (falls back to the GITHUB_TOKEN environment variable)
    #[arg(long, global = true)]
    token: Option<String>,

    /// API base URL, e.g. for GitHub Enterprise
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log every API request to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the owner of the token
    Whoami,

    /// Show a user's profile
    User {
        /// GitHub login
        username: String,
    },

    /// List a user's repositories
    Repos {
        /// GitHub login
        username: String,
    },

    /// Create a repository for the token owner
    Create {
        /// Repository name
        name: String,

        /// Repository description
        #[arg(short, long)]
        description: Option<String>,

        /// Make the repository private
        #[arg(long)]
        private: bool,
    },

    /// Delete one of the token owner's repositories
    Delete {
        /// Repository name
        name: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("githubclient=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = ClientConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config = config.with_base_url(api_url);
    }

    let client = match cli.token {
        Some(token) => ApiClient::with_credentials(&StaticCredentials::new(token), config),
        None => ApiClient::with_credentials(&EnvCredentials::default(), config),
    }
    .with_context(|| {
        format!(
            "Failed to authenticate with GitHub. Use --token or set {}.",
            constants::env::TOKEN_VAR
        )
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Whoami => WhoamiCommand.execute(&client, &mut out)?,
        Commands::User { username } => UserCommand { username }.execute(&client, &mut out)?,
        Commands::Repos { username } => ReposCommand { username }.execute(&client, &mut out)?,
        Commands::Create {
            name,
            description,
            private,
        } => CreateCommand {
            name,
            description,
            private,
        }
        .execute(&client, &mut out)?,
        Commands::Delete { name } => DeleteCommand { name }.execute(&client, &mut out)?,
    }

    Ok(())
}
