//! CLI command definitions and dispatch for the `plv` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod agent;
pub mod chat;
pub mod status;

use clap::{Parser, Subcommand};

/// Chat with a hosted agent from the terminal.
#[derive(Parser)]
#[command(name = "plv", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat {
        /// Agent slug to talk to (overrides config.toml).
        #[arg(long)]
        agent: Option<String>,
    },

    /// Show the configured agent profile.
    Agent,

    /// Show the resolved endpoint configuration.
    Status,
}
