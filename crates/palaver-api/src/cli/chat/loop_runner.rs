//! Main chat loop orchestration.
//!
//! Coordinates the conversation lifecycle: welcome banner, input loop with
//! slash commands, the single-in-flight send protocol against the agent
//! endpoint, and rendering of replies and error surrogates.

use console::style;
use crossterm::style::Color;

use palaver_core::gateway::AgentGateway;
use palaver_core::session::{ChatSession, TurnOutcome};
use palaver_types::message::MessageRole;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Run the interactive chat loop.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let endpoint = &state.config.endpoint;
    let agent_name = state
        .config
        .agent
        .as_ref()
        .map(|profile| profile.name.clone())
        .unwrap_or_else(|| endpoint.agent.clone());

    print_welcome_banner(&agent_name, &endpoint.agent, state.gateway.generate_url());

    let renderer = ChatRenderer::new(Some(Color::Cyan));
    let mut session = ChatSession::new();

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                // Slash commands
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                            continue;
                        }
                        ChatCommand::Clear => {
                            chat_input.clear();
                            continue;
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::History => {
                            print_history(&session, &agent_name);
                            continue;
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                            continue;
                        }
                    }
                }

                // Accept the send; the input loop can't overlap requests, so
                // a decline here only means the text was blank.
                let Some(turn) = session.begin_send(&text) else {
                    continue;
                };

                // Thinking spinner while the single request is outstanding.
                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message("thinking...");
                spinner.enable_steady_tick(std::time::Duration::from_millis(80));

                let result = state.gateway.generate(turn.payload()).await;
                spinner.finish_and_clear();

                match session.resolve(turn, result) {
                    TurnOutcome::Reply(message) => {
                        println!("\n  {}", style(&agent_name).cyan().bold());
                        print!("{}", renderer.render_markdown(&message.content));
                        println!("{}", renderer.timestamp_line(message.created_at));
                        println!();
                    }
                    TurnOutcome::Failure(message) => {
                        println!(
                            "\n  {} {}",
                            style("!").red().bold(),
                            message.content
                        );
                        println!("{}", renderer.timestamp_line(message.created_at));
                        // Transient notification on top of the transcript entry.
                        eprintln!(
                            "  {}",
                            style("Message could not be sent. Please try again.").yellow()
                        );
                        println!();
                    }
                }
            }
        }
    }

    Ok(())
}

/// Print the in-memory transcript with short previews.
fn print_history(session: &ChatSession, agent_name: &str) {
    println!();
    if session.transcript().is_empty() {
        println!("  {}", style("No messages yet.").dim());
        println!();
        return;
    }
    for msg in session.transcript().messages() {
        let role_label = match msg.role {
            MessageRole::User => format!("{}", style("You").green()),
            MessageRole::Assistant => format!("{}", style(agent_name).cyan()),
        };
        let preview: String = msg.content.chars().take(97).collect();
        let suffix = if msg.content.chars().count() > 97 { "..." } else { "" };
        println!("  {} {preview}{suffix}", style(role_label).bold());
    }
    println!();
}
