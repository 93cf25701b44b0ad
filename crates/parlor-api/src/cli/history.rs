//! `parlor history`: print stored messages straight from the database.

use anyhow::Result;
use console::style;

use parlor_types::message::{Page, Sender};

use crate::http::response::MessageBody;
use crate::state::AppState;

pub async fn show_history(state: &AppState, page: Page, json: bool) -> Result<()> {
    let messages = state.chat_service.history(page).await?;

    if json {
        let out: Vec<MessageBody> = messages.iter().map(MessageBody::from).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if messages.is_empty() {
        println!();
        println!("  No messages yet.");
        println!();
        return Ok(());
    }

    println!();
    for m in &messages {
        let who = match m.sender {
            Sender::User => style(m.sender.as_str()).green().bold(),
            Sender::Bot => style(m.sender.as_str()).cyan().bold(),
        };
        println!(
            "  {} {} {}: {}",
            style(format!("#{}", m.id)).dim(),
            style(&m.timestamp).dim(),
            who,
            m.text
        );
    }
    println!();

    Ok(())
}
