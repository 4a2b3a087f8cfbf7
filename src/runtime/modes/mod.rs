//! Mode routing
//!
//! `serve` (or no subcommand) runs the HTTP server; every other subcommand
//! is a one-shot administration command against the same database.

pub mod cli;
pub mod server;

pub use cli::run_cli;
pub use server::run_server;
