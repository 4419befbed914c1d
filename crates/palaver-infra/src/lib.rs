//! Infrastructure adapters for Palaver.
//!
//! Implements the `AgentGateway` port from `palaver-core` over reqwest, and
//! provides configuration loading and tool-server URL construction.

pub mod config;
pub mod http;
pub mod tool_server;
