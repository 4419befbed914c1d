//! AgentGateway trait definition.
//!
//! This is the seam between the conversation logic and the network. The
//! reqwest-backed implementation lives in `palaver-infra`; tests use mock
//! implementations that never touch the network.

use serde_json::Value;

use palaver_types::error::GatewayError;
use palaver_types::message::TurnPayload;

/// Port for the remote agent's generate endpoint.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). One call per
/// send; the response body is arbitrary JSON whose shape is the response
/// extractor's problem, not the gateway's.
pub trait AgentGateway: Send + Sync {
    /// Human-readable gateway name for logs and status output.
    fn name(&self) -> &str;

    /// POST the given turns to the generate endpoint and return the raw
    /// JSON body of a 2xx response. Any non-2xx status is an error.
    fn generate(
        &self,
        turns: &[TurnPayload],
    ) -> impl std::future::Future<Output = Result<Value, GatewayError>> + Send;
}
