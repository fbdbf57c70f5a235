pub mod action;
pub mod create;
pub mod deal;
pub mod help;
pub mod mydeals;

use std::sync::Arc;

use serenity::model::application::ComponentInteraction;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use tokio::sync::Mutex;
use tracing::error;

use crate::store::EscrowStore;

pub async fn handle_message(ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }

    let parts: Vec<&str> = msg.content.split_whitespace().collect();
    let Some(&command) = parts.first() else {
        return;
    };
    let args = &parts[1..];

    let result = match command {
        "$start" | "$help" => help::execute(ctx, msg).await,
        "$create" => create::execute(ctx, msg).await,
        "$deal" => deal::execute(ctx, msg, args).await,
        "$mydeals" => mydeals::execute(ctx, msg).await,
        // Anything that is not a command feeds the sender's open draft, if any
        _ if !command.starts_with('$') => create::answer(ctx, msg).await,
        _ => return,
    };

    if let Err(e) = result {
        error!("Error executing command {}: {}", command, e);

        let embed = serenity::builder::CreateEmbed::default()
            .title("Command Error")
            .description(format!("❌ {}", e))
            .color(0xff0000);

        let _ = msg
            .channel_id
            .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
            .await;
    }
}

pub async fn handle_component(ctx: &Context, interaction: &ComponentInteraction) {
    if let Err(e) = action::execute(ctx, interaction).await {
        error!(
            "Error handling button {}: {}",
            interaction.data.custom_id, e
        );
    }
}

/// Fetch the shared store handle from the client TypeMap
pub(crate) async fn escrow_store(ctx: &Context) -> Result<Arc<Mutex<EscrowStore>>, String> {
    let data = ctx.data.read().await;
    data.get::<crate::EscrowData>()
        .cloned()
        .ok_or_else(|| "Escrow store not initialized".to_string())
}
