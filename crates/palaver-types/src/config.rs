//! Client configuration types for Palaver.
//!
//! `ClientConfig` represents the top-level `config.toml` that names the
//! remote agent deployment and, optionally, the declarative agent profile
//! for display purposes.

use serde::{Deserialize, Serialize};

use crate::agent::AgentProfile;

/// Top-level configuration for the Palaver client.
///
/// Loaded from `~/.palaver/config.toml`. All fields have sensible defaults
/// so a missing file still yields a usable (local-development) config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Where the hosted agent lives.
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Declarative description of the server-side agent (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<AgentProfile>,
}

/// The remote agent endpoint.
///
/// The generate URL is deployment-specific configuration, not a protocol
/// constant: `{base_url}/api/agents/{agent}/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Base URL of the agent deployment (often a tunnel URL).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Slug of the agent to talk to.
    #[serde(default = "default_agent_slug")]
    pub agent: String,

    /// Send the `ngrok-skip-browser-warning` header so tunnel interstitial
    /// pages don't swallow the request.
    #[serde(default = "default_true")]
    pub bypass_tunnel_warning: bool,

    /// Optional total request timeout in seconds. When unset, the transport
    /// default applies and a hung endpoint holds the session until exit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    // Mastra's local dev server default.
    "http://127.0.0.1:4111".to_string()
}

fn default_agent_slug() -> String {
    "assistant".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            agent: default_agent_slug(),
            bypass_tunnel_warning: true,
            request_timeout_secs: None,
        }
    }
}

impl EndpointConfig {
    /// Full URL of the generate endpoint for the configured agent.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/api/agents/{}/generate",
            self.base_url.trim_end_matches('/'),
            self.agent
        )
    }
}
