//! `plv status` -- show the resolved endpoint configuration.

use console::style;

use crate::state::AppState;

/// Print the resolved endpoint configuration.
pub fn status(state: &AppState, json: bool) {
    let endpoint = &state.config.endpoint;

    if json {
        let out = serde_json::json!({
            "data_dir": state.data_dir.display().to_string(),
            "base_url": endpoint.base_url,
            "agent": endpoint.agent,
            "generate_url": endpoint.generate_url(),
            "bypass_tunnel_warning": endpoint.bypass_tunnel_warning,
            "request_timeout_secs": endpoint.request_timeout_secs,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return;
    }

    println!();
    println!("  {}", style("Palaver status").cyan().bold());
    println!();
    println!(
        "  {}  {}",
        style("Config:").bold(),
        style(state.data_dir.join("config.toml").display()).dim()
    );
    println!(
        "  {}  {}",
        style("Agent:").bold(),
        style(&endpoint.agent).dim()
    );
    println!(
        "  {}  {}",
        style("Endpoint:").bold(),
        style(endpoint.generate_url()).dim()
    );
    let timeout = match endpoint.request_timeout_secs {
        Some(secs) => format!("{secs}s"),
        None => "transport default (none)".to_string(),
    };
    println!("  {}  {}", style("Timeout:").bold(), style(timeout).dim());
    println!(
        "  {}  {}",
        style("Tunnel bypass header:").bold(),
        style(endpoint.bypass_tunnel_warning).dim()
    );
    println!();
}
