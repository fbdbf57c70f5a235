use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;

use crate::commands::escrow_store;
use crate::models::{ActionOutcome, DealAction};
use crate::services::deal_service;

/// Button press on a deal embed. The custom id is decoded into a
/// `DealAction` here, at the transport boundary; the protocol never sees
/// raw strings.
pub async fn execute(ctx: &Context, interaction: &ComponentInteraction) -> Result<(), String> {
    let Some(action) = DealAction::parse(&interaction.data.custom_id) else {
        // Not one of our buttons
        return Ok(());
    };

    let store = escrow_store(ctx).await?;
    let result = {
        let mut store = store.lock().await;
        deal_service::request_action(&mut store, interaction.user.id.get() as i64, action)
    };

    let reply = match result {
        Ok(ActionOutcome::Completed { deal_id }) => {
            format!("✅ Deal #{} completed", deal_id)
        }
        Ok(ActionOutcome::WaitingCounterparty { .. }) => {
            "⏳ Approved. Waiting for the other party.".to_string()
        }
        Ok(ActionOutcome::Rejected { deal_id }) => {
            format!("❌ Deal #{} rejected", deal_id)
        }
        Ok(ActionOutcome::AlreadySettled { deal_id, status }) => {
            format!("Deal #{} is already {}.", deal_id, status.as_str())
        }
        Err(e) => format!("🚫 {}", e),
    };

    interaction
        .create_response(
            ctx,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content(reply),
            ),
        )
        .await
        .map_err(|e| format!("Failed to answer button press: {}", e))?;

    Ok(())
}
