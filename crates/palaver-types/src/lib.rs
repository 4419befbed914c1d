//! Shared domain types for Palaver.
//!
//! This crate contains the core domain types used across the Palaver client:
//! chat messages, endpoint configuration, the declarative agent profile, and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod agent;
pub mod config;
pub mod error;
pub mod message;
