//! HttpAgentGateway -- concrete [`AgentGateway`] implementation over reqwest.
//!
//! POSTs the turn payload to the deployment's generate endpoint
//! (`/api/agents/{agent}/generate`) and hands the raw JSON body back to the
//! caller. Any non-2xx status is a hard failure for the turn; there is no
//! retry, no status-specific handling, and -- unless configured -- no
//! timeout beyond transport defaults.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use palaver_core::gateway::AgentGateway;
use palaver_types::config::EndpointConfig;
use palaver_types::error::GatewayError;
use palaver_types::message::TurnPayload;

/// Header that tells tunnel proxies to skip their browser interstitial.
const TUNNEL_BYPASS_HEADER: &str = "ngrok-skip-browser-warning";

/// JSON request body for the generate endpoint.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    messages: &'a [TurnPayload],
}

/// reqwest-backed gateway to the hosted agent.
pub struct HttpAgentGateway {
    client: reqwest::Client,
    generate_url: String,
    bypass_tunnel_warning: bool,
}

impl HttpAgentGateway {
    /// Build a gateway for the configured endpoint.
    ///
    /// No timeout is set unless `request_timeout_secs` is configured: the
    /// reference behavior lets a hung endpoint hold the outstanding request
    /// until the process exits.
    pub fn new(endpoint: &EndpointConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = endpoint.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().expect("failed to create reqwest client");

        Self {
            client,
            generate_url: endpoint.generate_url(),
            bypass_tunnel_warning: endpoint.bypass_tunnel_warning,
        }
    }

    /// The resolved generate URL (for status output).
    pub fn generate_url(&self) -> &str {
        &self.generate_url
    }

    /// Override the generate URL (useful for testing).
    #[allow(dead_code)]
    pub fn with_generate_url(mut self, url: String) -> Self {
        self.generate_url = url;
        self
    }
}

impl AgentGateway for HttpAgentGateway {
    fn name(&self) -> &str {
        "http"
    }

    async fn generate(&self, turns: &[TurnPayload]) -> Result<Value, GatewayError> {
        let body = GenerateRequest { messages: turns };

        let mut request = self
            .client
            .post(&self.generate_url)
            .header("content-type", "application/json");
        if self.bypass_tunnel_warning {
            request = request.header(TUNNEL_BYPASS_HEADER, "true");
        }

        tracing::debug!(url = %self.generate_url, turns = turns.len(), "posting to agent");

        let response = request
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| GatewayError::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palaver_types::message::MessageRole;

    fn make_gateway() -> HttpAgentGateway {
        HttpAgentGateway::new(&EndpointConfig {
            base_url: "https://agents.example.com".to_string(),
            agent: "gameAgent".to_string(),
            bypass_tunnel_warning: true,
            request_timeout_secs: None,
        })
    }

    #[test]
    fn test_gateway_name() {
        assert_eq!(make_gateway().name(), "http");
    }

    #[test]
    fn test_generate_url_from_config() {
        let gateway = make_gateway();
        assert_eq!(
            gateway.generate_url(),
            "https://agents.example.com/api/agents/gameAgent/generate"
        );
    }

    #[test]
    fn test_generate_url_override() {
        let gateway = make_gateway().with_generate_url("http://localhost:8080/gen".to_string());
        assert_eq!(gateway.generate_url(), "http://localhost:8080/gen");
    }

    #[test]
    fn test_request_body_shape() {
        // The wire contract: {"messages":[{"role":"user","content":...}]}
        let turns = vec![TurnPayload {
            role: MessageRole::User,
            content: "hello".to_string(),
        }];
        let body = GenerateRequest { messages: &turns };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(
            json,
            "{\"messages\":[{\"role\":\"user\",\"content\":\"hello\"}]}"
        );
    }

    #[test]
    fn test_timeout_config_accepted() {
        // Just verify construction with a timeout doesn't panic.
        let _gateway = HttpAgentGateway::new(&EndpointConfig {
            request_timeout_secs: Some(120),
            ..EndpointConfig::default()
        });
    }
}
