//! Welcome banner display for chat sessions.
//!
//! Prints a styled banner when a chat session starts, showing the agent's
//! identity and endpoint, plus a greeting while the transcript is empty.

use console::style;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(name: &str, agent_slug: &str, generate_url: &str) {
    println!();
    println!("  * {}", style(name).cyan().bold());
    println!("  {}", style(format!("agent: {agent_slug}")).dim());
    println!("  {}", style(generate_url).dim());
    println!();
    println!("  {}", style("Hello! How can I help you?").bold());
    println!(
        "  {}",
        style("Ask me anything -- don't hold back.").dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
