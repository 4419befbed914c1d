//! Send-protocol state machine.
//!
//! `ChatSession` owns the transcript and serializes sends: a send is only
//! accepted while `Idle`, transitions to `Awaiting` for the lifetime of the
//! HTTP call, and returns to `Idle` on resolution -- success or failure.
//! There is at most one request in flight by construction, so no request
//! identity or response matching exists.

use serde_json::Value;

use palaver_types::error::GatewayError;
use palaver_types::message::{ChatMessage, TurnPayload};

use crate::extract::display_text;
use crate::gateway::AgentGateway;
use crate::transcript::Transcript;

/// Whether a request is currently outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendState {
    /// No request in flight; sends are accepted.
    #[default]
    Idle,
    /// A request is outstanding; further sends are silently declined.
    Awaiting,
}

/// Token for an accepted send.
///
/// Produced by [`ChatSession::begin_send`] and consumed by
/// [`ChatSession::resolve`]. Moving it through the call enforces the
/// protocol shape: exactly one resolution per accepted send, and no
/// resolution without a send.
#[derive(Debug)]
pub struct OutboundTurn {
    payload: Vec<TurnPayload>,
}

impl OutboundTurn {
    /// The wire payload: only the newest user turn. Prior turns stay
    /// client-side; multi-turn context is reconstructed server-side.
    pub fn payload(&self) -> &[TurnPayload] {
        &self.payload
    }
}

/// How a round-trip ended.
#[derive(Debug)]
pub enum TurnOutcome {
    /// The endpoint answered; the extracted text was appended.
    Reply(ChatMessage),
    /// The request failed; an error surrogate was appended. Callers should
    /// raise a transient "send failed, retry" notification on top.
    Failure(ChatMessage),
}

impl TurnOutcome {
    /// The assistant message this outcome appended.
    pub fn message(&self) -> &ChatMessage {
        match self {
            TurnOutcome::Reply(message) | TurnOutcome::Failure(message) => message,
        }
    }
}

/// The current conversation plus the outstanding-request guard.
#[derive(Debug, Default)]
pub struct ChatSession {
    transcript: Transcript,
    state: SendState,
}

impl ChatSession {
    /// Start a session with an empty transcript, ready to send.
    pub fn new() -> Self {
        Self::default()
    }

    /// The conversation so far, in append order.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Whether a request is currently outstanding.
    pub fn state(&self) -> SendState {
        self.state
    }

    /// Accept a send, or silently decline it.
    ///
    /// Declines (returning `None`, with the transcript untouched) when the
    /// trimmed input is empty or a request is already outstanding. On
    /// acceptance the user message is appended immediately -- it is never
    /// retracted, even if the request later fails -- and the session
    /// transitions to `Awaiting`.
    pub fn begin_send(&mut self, input: &str) -> Option<OutboundTurn> {
        let trimmed = input.trim();
        if trimmed.is_empty() || self.state == SendState::Awaiting {
            return None;
        }

        let message = ChatMessage::user(trimmed);
        let payload = vec![TurnPayload::from(&message)];
        self.transcript.append(message);
        self.state = SendState::Awaiting;

        Some(OutboundTurn { payload })
    }

    /// Resolve the outstanding send with the gateway's result.
    ///
    /// Always transitions back to `Idle` so the user can send again. A
    /// successful response goes through the extractor (placeholders
    /// included); a failure becomes a human-readable error surrogate
    /// embedding the reason. No automatic retry in either case.
    pub fn resolve(
        &mut self,
        _turn: OutboundTurn,
        result: Result<Value, GatewayError>,
    ) -> TurnOutcome {
        self.state = SendState::Idle;

        match result {
            Ok(body) => {
                let message = ChatMessage::assistant(display_text(&body));
                self.transcript.append(message.clone());
                TurnOutcome::Reply(message)
            }
            Err(err) => {
                tracing::warn!(error = %err, "send failed");
                let message = ChatMessage::assistant(format!(
                    "Sorry, something went wrong: {err}. Please try again."
                ));
                self.transcript.append(message.clone());
                TurnOutcome::Failure(message)
            }
        }
    }

    /// Run one full round-trip against a gateway.
    ///
    /// Returns `None` when the send was declined (blank input -- the
    /// `Awaiting` case cannot arise here because this method holds the
    /// session across the await).
    pub async fn send<G: AgentGateway>(
        &mut self,
        gateway: &G,
        input: &str,
    ) -> Option<TurnOutcome> {
        let turn = self.begin_send(input)?;
        let result = gateway.generate(turn.payload()).await;
        Some(self.resolve(turn, result))
    }
}
