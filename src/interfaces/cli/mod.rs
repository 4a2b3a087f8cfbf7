//! CLI interface module
//!
//! One-shot administration commands run directly against the database.

pub mod commands;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::DynqrError;
use crate::runtime::lifetime::startup::prepare_cli_startup;
use crate::services::CreateSlugRequest;
use commands::{add_slug, config_generate, list_slugs, show_slug, update_slug};
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<DynqrError> for CliError {
    fn from(err: DynqrError) -> Self {
        match err {
            DynqrError::Validation(msg) | DynqrError::Config(msg) => CliError::ParseError(msg),
            DynqrError::NotFound(msg) | DynqrError::Conflict(msg) => CliError::CommandError(msg),
            other => CliError::StorageError(other.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    // Generate doesn't need DB connection
    if let Commands::Config { action } = cmd {
        let ConfigCommands::Generate { output_path, force } = action;
        return config_generate(output_path, force);
    }

    let service = prepare_cli_startup(config).await?;

    match cmd {
        Commands::Add {
            redirect_url,
            slug,
            title,
            owner,
        } => {
            let request = CreateSlugRequest {
                slug,
                title,
                redirect_url,
                owner_id: owner,
            };
            add_slug(&service, request).await
        }

        Commands::Update { slug, redirect_url } => {
            update_slug(&service, &slug, &redirect_url).await
        }

        Commands::List { owner } => list_slugs(&service, owner.as_deref()).await,

        Commands::Show { slug } => show_slug(&service, &slug).await,

        Commands::Serve => unreachable!("server mode handled in main"),

        Commands::Config { .. } => unreachable!("handled above"),
    }
}
