//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for dynqr using clap's derive macros.

use clap::{Parser, Subcommand};

/// dynqr - dynamic QR code redirect service
#[derive(Parser, Debug)]
#[command(name = "dynqr")]
#[command(version)]
#[command(about = "Dynamic QR code redirect service", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (default: ./config.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the redirect server (default)
    Serve,

    /// Create a slug pointing at a redirect URL
    Add {
        /// Absolute URL or path starting with '/'
        redirect_url: String,

        /// Slug to use instead of a generated one
        #[arg(long)]
        slug: Option<String>,

        #[arg(long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        owner: String,
    },

    /// Replace the redirect URL of an existing slug
    Update {
        slug: String,

        /// New redirect URL
        redirect_url: String,
    },

    /// List slugs, newest first
    List {
        /// Only show slugs of this owner
        #[arg(long)]
        owner: Option<String>,
    },

    /// Show one slug and its scan URL
    Show { slug: String },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// 无子命令时等同于 `serve`
    pub fn is_server_mode(&self) -> bool {
        matches!(self.command, None | Some(Commands::Serve))
    }
}
