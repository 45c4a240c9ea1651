//! CLI module for the Session Token API

pub mod serve;

use clap::{Parser, Subcommand};

/// Session Token API - issues and validates signed session tokens
#[derive(Parser)]
#[command(name = "session-token-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}
