//! Declarative agent profile types.
//!
//! The hosted agent is wired together server-side: a model, a system
//! instruction, a memory backend keyed by a local database path, and remote
//! tool servers. The client never executes any of it; it models the wiring
//! as data so `plv agent` can display the deployment and so tool-server
//! connection URLs can be constructed.

use serde::{Deserialize, Serialize};

/// Declarative description of the server-side agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Display name (e.g., "Gaming Assistant").
    pub name: String,

    /// Model identifier the deployment uses (e.g., "gpt-4o-mini").
    pub model: String,

    /// Free-text system instruction.
    #[serde(default)]
    pub instructions: String,

    /// Persistent memory backend, if the deployment has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryConfig>,

    /// Remote tool servers the agent can call.
    #[serde(default)]
    pub tool_servers: Vec<ToolServerConfig>,
}

/// Memory/storage backend configuration, keyed by a local database path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Storage URL, e.g. `file:../mastra.db`.
    pub storage_url: String,
}

/// A remote tool-server connection.
///
/// The connection URL is the server URL plus an API key and profile pair as
/// query parameters; the key itself is read from the named environment
/// variable, never from the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolServerConfig {
    /// Tool namespace (e.g., "gameTrend").
    pub name: String,

    /// Base URL of the tool server.
    pub url: String,

    /// Provider-side profile identifier.
    pub profile: String,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_api_key_env() -> String {
    "SMITHERY_API_KEY".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_profile_deserialize() {
        let toml_str = r#"
name = "Gaming Assistant"
model = "gpt-4o-mini"
instructions = "You are a gaming assistant with live store data."

[memory]
storage_url = "file:../mastra.db"

[[tool_servers]]
name = "gameTrend"
url = "https://server.smithery.ai/@halismertkir/game-trends-mcp/mcp"
profile = "skinny-clam-p5YUwk"
"#;
        let profile: AgentProfile = toml::from_str(toml_str).unwrap();
        assert_eq!(profile.name, "Gaming Assistant");
        assert_eq!(profile.model, "gpt-4o-mini");
        assert_eq!(
            profile.memory.as_ref().unwrap().storage_url,
            "file:../mastra.db"
        );
        assert_eq!(profile.tool_servers.len(), 1);
        assert_eq!(profile.tool_servers[0].name, "gameTrend");
        assert_eq!(profile.tool_servers[0].api_key_env, "SMITHERY_API_KEY");
    }

    #[test]
    fn test_agent_profile_minimal() {
        let toml_str = r#"
name = "Assistant"
model = "gpt-4o-mini"
"#;
        let profile: AgentProfile = toml::from_str(toml_str).unwrap();
        assert!(profile.instructions.is_empty());
        assert!(profile.memory.is_none());
        assert!(profile.tool_servers.is_empty());
    }

    #[test]
    fn test_agent_profile_serde_roundtrip() {
        let profile = AgentProfile {
            name: "Assistant".to_string(),
            model: "gpt-4o-mini".to_string(),
            instructions: String::new(),
            memory: None,
            tool_servers: vec![ToolServerConfig {
                name: "gameTrend".to_string(),
                url: "https://server.smithery.ai/mcp".to_string(),
                profile: "skinny-clam-p5YUwk".to_string(),
                api_key_env: "SMITHERY_API_KEY".to_string(),
            }],
        };
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: AgentProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.tool_servers[0].profile, "skinny-clam-p5YUwk");
    }
}
