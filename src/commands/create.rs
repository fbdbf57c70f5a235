use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::commands::escrow_store;
use crate::models::SubmitOutcome;
use crate::services::draft_service;

/// `$create` — open a deal dialogue for the sender
pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    let store = escrow_store(ctx).await?;

    let prompt = {
        let mut store = store.lock().await;
        draft_service::start_draft(&mut store, msg.author.id.get() as i64)
    };

    msg.channel_id
        .send_message(ctx, serenity::builder::CreateMessage::default().content(prompt))
        .await
        .map_err(|e| format!("Failed to send prompt: {}", e))?;

    Ok(())
}

/// Free text from an actor with an open draft. Silent when no draft is
/// open — the message simply is not for us.
pub async fn answer(ctx: &Context, msg: &Message) -> Result<(), String> {
    let store = escrow_store(ctx).await?;

    let outcome = {
        let mut store = store.lock().await;
        draft_service::submit_answer(&mut store, msg.author.id.get() as i64, &msg.content)
    };

    let Some(outcome) = outcome else {
        return Ok(());
    };

    let reply = match outcome {
        SubmitOutcome::Prompt(prompt) => prompt.to_string(),
        SubmitOutcome::Invalid(error) => format!("❌ {}", error),
        SubmitOutcome::Created { deal_id } => format!(
            "✅ Deal created (#{})\nUse `$deal {}` to review and approve.",
            deal_id, deal_id
        ),
    };

    msg.channel_id
        .send_message(ctx, serenity::builder::CreateMessage::default().content(reply))
        .await
        .map_err(|e| format!("Failed to send reply: {}", e))?;

    Ok(())
}
