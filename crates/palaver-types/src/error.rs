use thiserror::Error;

/// Errors from talking to the agent endpoint.
///
/// Every variant is recoverable: the worst outcome of any of these is an
/// error-surrogate assistant message in the transcript and a re-enabled
/// send control.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never completed (DNS, connect, TLS, or read failure).
    #[error("request failed: {0}")]
    Transport(String),

    /// The request completed with a non-2xx status. No status code gets
    /// special treatment; all of them are hard failures for the turn.
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    /// The response body was not JSON.
    #[error("invalid response body: {0}")]
    Deserialization(String),
}
