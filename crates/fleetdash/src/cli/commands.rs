//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fleetdash - Read-only status dashboard for an operated Discord bot
#[derive(Parser, Debug)]
#[command(name = "fleetdash")]
#[command(about = "Read-only status dashboard for an operated Discord bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ./fleetdash.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show bot runtime statistics
    Status {
        /// Print the status view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print recent bot logs
    Logs,

    /// List shard health, one line per shard
    Shards,

    /// List every guild configuration, including removed guilds
    Guilds,

    /// List every user profile, including removed users
    Users,

    /// Check that the bot API and the database are reachable
    Health,
}
