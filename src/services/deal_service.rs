//! Deal lookup and the approval protocol.
//!
//! A pending deal completes once both parties approve; a single reject
//! from either party is final. Actions on a settled deal change nothing
//! and just report the current status.

use serenity::builder::CreateEmbed;
use tracing::{info, warn};

use crate::models::{ActionOutcome, DealAction, DealInfo, DealStatus, DealSummary};
use crate::store::EscrowStore;
use crate::utils::EscrowError;

/// Apply one approve/reject action from an actor to a deal.
///
/// Only the two named counterparties may act; anyone else gets a denial
/// that does not reveal whether the deal exists.
pub fn request_action(
    store: &mut EscrowStore,
    actor_id: i64,
    action: DealAction,
) -> Result<ActionOutcome, EscrowError> {
    let deal = store
        .deals
        .deal_mut(action.deal_id())
        .ok_or(EscrowError::NotFound)?;

    if !deal.is_party(actor_id) {
        warn!("Actor {} denied action on deal #{}", actor_id, deal.id);
        return Err(EscrowError::Unauthorized);
    }

    if deal.status.is_terminal() {
        return Ok(ActionOutcome::AlreadySettled {
            deal_id: deal.id,
            status: deal.status,
        });
    }

    match action {
        DealAction::Approve(_) => {
            if actor_id == deal.buyer_id {
                deal.buyer_approved = true;
            }
            if actor_id == deal.seller_id {
                deal.seller_approved = true;
            }

            if deal.buyer_approved && deal.seller_approved {
                deal.status = DealStatus::Completed;
                info!("Deal #{} completed", deal.id);
                Ok(ActionOutcome::Completed { deal_id: deal.id })
            } else {
                Ok(ActionOutcome::WaitingCounterparty { deal_id: deal.id })
            }
        }
        DealAction::Reject(_) => {
            deal.status = DealStatus::Rejected;
            info!("Deal #{} rejected by actor {}", deal.id, actor_id);
            Ok(ActionOutcome::Rejected { deal_id: deal.id })
        }
    }
}

/// Fetch the details a party is allowed to see for `$deal <id>`
pub fn deal_info(store: &EscrowStore, actor_id: i64, deal_id: i64) -> Result<DealInfo, EscrowError> {
    let deal = store.deals.deal(deal_id).ok_or(EscrowError::NotFound)?;

    if !deal.is_party(actor_id) {
        return Err(EscrowError::Unauthorized);
    }

    Ok(DealInfo {
        id: deal.id,
        amount: format!("{:.2}", deal.amount),
        currency: deal.currency.clone(),
        status: deal.status,
    })
}

/// All deals the actor is a party to, newest first, for `$mydeals`
pub fn my_deals(store: &EscrowStore, actor_id: i64) -> Vec<DealSummary> {
    store
        .deals
        .deals_for(actor_id)
        .into_iter()
        .map(|deal| DealSummary {
            id: deal.id,
            amount: format!("{:.2}", deal.amount),
            currency: deal.currency.clone(),
            role: if actor_id == deal.buyer_id { "buyer" } else { "seller" },
            status: deal.status,
            created: deal.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect()
}

pub fn create_deal_embed(info: &DealInfo) -> CreateEmbed {
    let (title, color) = match info.status {
        DealStatus::Pending => ("⏳ Deal Pending", 0xffa500),
        DealStatus::Completed => ("✅ Deal Completed", 0x00ff00),
        DealStatus::Rejected => ("❌ Deal Rejected", 0xff0000),
    };

    CreateEmbed::default()
        .title(title)
        .field("Deal ID", format!("`{}`", info.id), true)
        .field("Amount", format!("`{} {}`", info.amount, info.currency), true)
        .field("Status", format!("**{}**", info.status.as_str()), true)
        .color(color)
}
