//! Tool-server connection URL construction.
//!
//! The agent's remote tool servers are addressed by a base URL plus an API
//! key and profile pair carried as query parameters. The key is wrapped in
//! [`secrecy::SecretString`] and only exposed while building the URL; the
//! display form masks it.

use secrecy::{ExposeSecret, SecretString};

use palaver_types::agent::ToolServerConfig;

/// Build the full connection URL for a tool server.
///
/// Shape: `{url}?api_key={key}&profile={profile}`, appended with `&` when
/// the base URL already carries a query string.
pub fn connection_url(server: &ToolServerConfig, api_key: &SecretString) -> String {
    let separator = if server.url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}api_key={}&profile={}",
        server.url,
        separator,
        api_key.expose_secret(),
        server.profile
    )
}

/// The connection URL with the API key masked, for display and logs.
pub fn masked_connection_url(server: &ToolServerConfig) -> String {
    let separator = if server.url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}api_key=****&profile={}",
        server.url, separator, server.profile
    )
}

/// Read the server's API key from its configured environment variable.
pub fn api_key_from_env(server: &ToolServerConfig) -> Option<SecretString> {
    std::env::var(&server.api_key_env)
        .ok()
        .filter(|key| !key.is_empty())
        .map(SecretString::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_trend() -> ToolServerConfig {
        ToolServerConfig {
            name: "gameTrend".to_string(),
            url: "https://server.smithery.ai/@halismertkir/game-trends-mcp/mcp".to_string(),
            profile: "skinny-clam-p5YUwk".to_string(),
            api_key_env: "SMITHERY_API_KEY".to_string(),
        }
    }

    #[test]
    fn test_connection_url() {
        let url = connection_url(&game_trend(), &SecretString::from("test-key"));
        assert_eq!(
            url,
            "https://server.smithery.ai/@halismertkir/game-trends-mcp/mcp?api_key=test-key&profile=skinny-clam-p5YUwk"
        );
    }

    #[test]
    fn test_connection_url_with_existing_query() {
        let mut server = game_trend();
        server.url = "https://server.smithery.ai/mcp?v=2".to_string();
        let url = connection_url(&server, &SecretString::from("k"));
        assert_eq!(
            url,
            "https://server.smithery.ai/mcp?v=2&api_key=k&profile=skinny-clam-p5YUwk"
        );
    }

    #[test]
    fn test_masked_url_hides_key() {
        let masked = masked_connection_url(&game_trend());
        assert!(masked.contains("api_key=****"));
        assert!(masked.contains("profile=skinny-clam-p5YUwk"));
    }
}
