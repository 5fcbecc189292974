//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod find;
pub mod serve;
pub mod status;

use clap::{Parser, Subcommand};

/// Find the geographic center of a set of addresses
#[derive(Parser)]
#[command(name = "geocenter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve addresses and find their center
    Find(find::FindArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Show version, endpoint, and server status
    Status(status::StatusArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find(args) => find::run(args).await,
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
        Commands::Status(args) => status::run(args).await,
    }
}
