use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::commands::escrow_store;
use crate::services::deal_service;
use crate::utils::Table;

/// `$mydeals` — every deal the sender is buyer or seller of
pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    let store = escrow_store(ctx).await?;

    let deals = {
        let store = store.lock().await;
        deal_service::my_deals(&store, msg.author.id.get() as i64)
    };

    let reply = if deals.is_empty() {
        "You have no deals yet. Use `$create` to start one.".to_string()
    } else {
        let mut table = Table::new(vec!["ID", "Amount", "Role", "Status", "Created"]);
        for deal in &deals {
            table.add_row(vec![
                deal.id.to_string(),
                format!("{} {}", deal.amount, deal.currency),
                deal.role.to_string(),
                deal.status.as_str().to_string(),
                deal.created.clone(),
            ]);
        }
        table.render()
    };

    msg.channel_id
        .send_message(ctx, serenity::builder::CreateMessage::default().content(reply))
        .await
        .map_err(|e| format!("Failed to send deal list: {}", e))?;

    Ok(())
}
