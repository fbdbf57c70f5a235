use serenity::builder::{CreateActionRow, CreateButton};
use serenity::model::application::ButtonStyle;
use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::commands::escrow_store;
use crate::services::deal_service;

/// `$deal <id>` — deal details plus the approve/reject buttons
pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), String> {
    let Some(deal_id) = args.first().and_then(|a| a.parse::<i64>().ok()) else {
        return Err("Usage: `$deal <id>`".to_string());
    };

    let store = escrow_store(ctx).await?;
    let info = {
        let store = store.lock().await;
        deal_service::deal_info(&store, msg.author.id.get() as i64, deal_id)
    }
    .map_err(|e| e.to_string())?;

    let buttons = CreateActionRow::Buttons(vec![
        CreateButton::new(format!("approve_{}", info.id))
            .label("✅ Approve")
            .style(ButtonStyle::Success),
        CreateButton::new(format!("reject_{}", info.id))
            .label("❌ Reject")
            .style(ButtonStyle::Danger),
    ]);

    msg.channel_id
        .send_message(
            ctx,
            serenity::builder::CreateMessage::default()
                .embed(deal_service::create_deal_embed(&info))
                .components(vec![buttons]),
        )
        .await
        .map_err(|e| format!("Failed to send deal info: {}", e))?;

    Ok(())
}
