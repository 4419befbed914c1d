//! Conversation logic for Palaver.
//!
//! This crate defines the "port" (the [`gateway::AgentGateway`] trait) that
//! the infrastructure layer implements, plus the pure pieces of the client:
//! the append-only transcript, the response extractor, and the send-protocol
//! state machine. It depends only on `palaver-types` -- never on
//! `palaver-infra` or any I/O crate.

pub mod extract;
pub mod gateway;
pub mod session;
pub mod transcript;
