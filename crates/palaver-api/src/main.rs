//! Palaver CLI entry point.
//!
//! Binary name: `plv`
//!
//! Parses CLI arguments, initializes configuration and the HTTP gateway,
//! then dispatches to the appropriate command handler.

mod cli;
mod state;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use palaver_infra::http::HttpAgentGateway;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,palaver=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let mut state = AppState::init().await?;
    tracing::debug!(data_dir = %state.data_dir.display(), "state initialized");

    match cli.command {
        Commands::Chat { agent } => {
            if let Some(slug) = agent {
                // Point the gateway at a different agent for this session.
                state.config.endpoint.agent = slug;
                state.gateway = Arc::new(HttpAgentGateway::new(&state.config.endpoint));
            }
            cli::chat::loop_runner::run_chat_loop(&state).await?;
        }

        Commands::Agent => {
            cli::agent::show_agent(&state, cli.json);
        }

        Commands::Status => {
            cli::status::status(&state, cli.json);
        }
    }

    Ok(())
}
