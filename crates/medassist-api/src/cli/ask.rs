//! One-shot quick-action command.

use anyhow::Result;
use console::style;

use medassist_core::assistant::prompts::QuickAction;

use crate::state::AppState;

/// Answer a quick-action topic and print the reply.
pub async fn ask(state: &AppState, action: &str, json: bool) -> Result<()> {
    let topic = QuickAction::from_key(action);
    let content = state.chat_service.quick_action(action).await?;

    if json {
        let out = serde_json::json!({
            "action": topic.to_string(),
            "content": content,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {}",
        style("✚").red().bold(),
        style(topic.to_string()).cyan().bold()
    );
    println!();
    for line in content.lines() {
        println!("  {line}");
    }
    println!();
    println!(
        "  {}",
        style("General information only. Consult a healthcare professional.").dim()
    );
    println!();

    Ok(())
}
