//! `plv agent` -- display the declarative agent profile.
//!
//! The profile describes the server-side wiring (model, instructions,
//! memory backend, tool servers). Nothing here is executed client-side;
//! tool-server URLs are shown with their API keys masked.

use console::style;

use palaver_infra::tool_server::{api_key_from_env, masked_connection_url};
use palaver_types::agent::AgentProfile;

use crate::state::AppState;

/// Print the configured agent profile.
pub fn show_agent(state: &AppState, json: bool) {
    let Some(profile) = &state.config.agent else {
        if json {
            println!("{}", serde_json::json!({ "agent": null }));
        } else {
            println!();
            println!(
                "  {} No [agent] profile in config.toml.",
                style("!").yellow().bold()
            );
            println!();
        }
        return;
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&profile_json(profile)).unwrap_or_default()
        );
        return;
    }

    println!();
    println!("  {}", style(&profile.name).cyan().bold());
    println!("  {}  {}", style("Model:").bold(), style(&profile.model).dim());

    if !profile.instructions.is_empty() {
        let preview: String = profile.instructions.chars().take(120).collect();
        let suffix = if profile.instructions.chars().count() > 120 {
            "..."
        } else {
            ""
        };
        println!(
            "  {}  {}{}",
            style("Instructions:").bold(),
            style(preview).dim(),
            style(suffix).dim()
        );
    }

    if let Some(memory) = &profile.memory {
        println!(
            "  {}  {}",
            style("Memory:").bold(),
            style(&memory.storage_url).dim()
        );
    }

    for server in &profile.tool_servers {
        let key_state = if api_key_from_env(server).is_some() {
            style("key set".to_string()).green()
        } else {
            style(format!("{} unset", server.api_key_env)).yellow()
        };
        println!(
            "  {}  {} ({})",
            style(format!("Tool server '{}':", server.name)).bold(),
            style(masked_connection_url(server)).dim(),
            key_state
        );
    }
    println!();
}

fn profile_json(profile: &AgentProfile) -> serde_json::Value {
    serde_json::json!({
        "name": profile.name,
        "model": profile.model,
        "instructions": profile.instructions,
        "memory": profile.memory.as_ref().map(|m| m.storage_url.clone()),
        "tool_servers": profile
            .tool_servers
            .iter()
            .map(|s| {
                serde_json::json!({
                    "name": s.name,
                    "url": masked_connection_url(s),
                    "api_key_env": s.api_key_env,
                    "api_key_present": api_key_from_env(s).is_some(),
                })
            })
            .collect::<Vec<_>>(),
    })
}
