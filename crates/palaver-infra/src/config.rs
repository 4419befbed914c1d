//! Configuration loader for Palaver.
//!
//! Reads `config.toml` from the data directory (`~/.palaver/` in production)
//! and deserializes it into [`ClientConfig`]. Falls back to defaults when
//! the file is missing or malformed.

use std::path::{Path, PathBuf};

use palaver_types::config::ClientConfig;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority: `PALAVER_DATA_DIR`, then `~/.palaver`, then `./.palaver` when
/// no home directory is available.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PALAVER_DATA_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".palaver"),
        None => PathBuf::from(".palaver"),
    }
}

/// Load client configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ClientConfig::default()`]
///   (local-development endpoint).
/// - If the file exists but fails to parse, logs a warning and returns the
///   default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_client_config(data_dir: &Path) -> ClientConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            return ClientConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return ClientConfig::default();
        }
    };

    match toml::from_str::<ClientConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ClientConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_client_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_client_config(tmp.path()).await;
        assert_eq!(config.endpoint.base_url, "http://127.0.0.1:4111");
        assert!(config.agent.is_none());
    }

    #[tokio::test]
    async fn load_client_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
[endpoint]
base_url = "https://ea29-176-30-251-15.ngrok-free.app"
agent = "weatherAgent"

[agent]
name = "Gaming Assistant"
model = "gpt-4o-mini"

[[agent.tool_servers]]
name = "gameTrend"
url = "https://server.smithery.ai/@halismertkir/game-trends-mcp/mcp"
profile = "skinny-clam-p5YUwk"
"#,
        )
        .await
        .unwrap();

        let config = load_client_config(tmp.path()).await;
        assert_eq!(
            config.endpoint.generate_url(),
            "https://ea29-176-30-251-15.ngrok-free.app/api/agents/weatherAgent/generate"
        );
        let profile = config.agent.unwrap();
        assert_eq!(profile.name, "Gaming Assistant");
        assert_eq!(profile.tool_servers.len(), 1);
    }

    #[tokio::test]
    async fn load_client_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_client_config(tmp.path()).await;
        assert_eq!(config.endpoint.agent, "assistant");
    }
}
