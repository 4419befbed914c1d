//! Interactive CLI chat experience for Palaver.
//!
//! This module implements the chat loop: single-request send lifecycle with
//! markdown rendering, thinking spinner, welcome banner, and slash commands.
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
