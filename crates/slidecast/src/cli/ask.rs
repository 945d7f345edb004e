//! `ask` command handler.

use slidecast::{JsonError, SlidecastConfig, SlidecastResult, chat_service};

/// Run one turn with live collaborators and print the deck.
pub async fn ask(
    config: &SlidecastConfig,
    question: &str,
    chat: Option<i64>,
) -> SlidecastResult<()> {
    let service = chat_service(config)?;
    let answer = service.ask(chat, question).await?;

    tracing::info!(
        chat_id = answer.chat().id,
        title = %answer.chat().display_title(),
        "Answered"
    );
    let json = serde_json::to_string_pretty(answer.deck())
        .map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
