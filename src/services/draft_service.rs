//! Conversation engine for the `$create` dialogue.
//!
//! Walks one actor through four prompts (seller, amount, currency,
//! description), validating each answer before advancing. Logic is
//! synchronous over the store; command handlers do the transport I/O.

use tracing::{debug, info};

use crate::models::{DealDraft, SubmitOutcome};
use crate::store::EscrowStore;

pub const PROMPT_SELLER: &str = "Enter the seller's user ID:";
pub const PROMPT_AMOUNT: &str = "Enter amount:";
pub const PROMPT_CURRENCY: &str = "Enter currency (e.g. USD):";
pub const PROMPT_DESCRIPTION: &str = "Enter description:";

const INVALID_SELLER: &str = "Invalid user ID. Enter a numeric user ID.";
const SELLER_IS_BUYER: &str = "You cannot be your own seller. Enter another user's ID.";
const INVALID_AMOUNT: &str = "Invalid amount. Enter a number greater than zero.";
const INVALID_CURRENCY: &str = "Currency cannot be empty. Enter a currency code.";

/// Open a fresh draft for the actor, replacing any unfinished one, and
/// return the first prompt.
pub fn start_draft(store: &mut EscrowStore, actor_id: i64) -> &'static str {
    debug!("Opening draft session for actor {}", actor_id);
    store.sessions.open(actor_id);
    PROMPT_SELLER
}

/// Feed one line of input to the actor's open draft.
///
/// Returns `None` when the actor has no draft open — free text outside a
/// dialogue is ignored. Validation failures leave the step and all
/// collected fields untouched; the actor just answers again.
pub fn submit_answer(store: &mut EscrowStore, actor_id: i64, text: &str) -> Option<SubmitOutcome> {
    let draft = store.sessions.draft(actor_id)?;

    let outcome = match draft {
        DealDraft::AwaitingSeller => match text.trim().parse::<i64>() {
            // Buyer and seller must be two different parties
            Ok(seller_id) if seller_id == actor_id => SubmitOutcome::Invalid(SELLER_IS_BUYER),
            Ok(seller_id) => {
                store.sessions.put(actor_id, DealDraft::AwaitingAmount { seller_id });
                SubmitOutcome::Prompt(PROMPT_AMOUNT)
            }
            Err(_) => SubmitOutcome::Invalid(INVALID_SELLER),
        },

        DealDraft::AwaitingAmount { seller_id } => {
            let seller_id = *seller_id;
            match text.trim().parse::<f64>() {
                Ok(amount) if amount > 0.0 => {
                    store
                        .sessions
                        .put(actor_id, DealDraft::AwaitingCurrency { seller_id, amount });
                    SubmitOutcome::Prompt(PROMPT_CURRENCY)
                }
                _ => SubmitOutcome::Invalid(INVALID_AMOUNT),
            }
        }

        DealDraft::AwaitingCurrency { seller_id, amount } => {
            let (seller_id, amount) = (*seller_id, *amount);
            let currency = text.trim().to_uppercase();
            if currency.is_empty() {
                SubmitOutcome::Invalid(INVALID_CURRENCY)
            } else {
                store.sessions.put(
                    actor_id,
                    DealDraft::AwaitingDescription {
                        seller_id,
                        amount,
                        currency,
                    },
                );
                SubmitOutcome::Prompt(PROMPT_DESCRIPTION)
            }
        }

        DealDraft::AwaitingDescription {
            seller_id,
            amount,
            currency,
        } => {
            let (seller_id, amount, currency) = (*seller_id, *amount, currency.clone());
            store.sessions.close(actor_id);
            let deal_id = store.deals.create_deal(
                actor_id,
                seller_id,
                amount,
                currency,
                text.trim().to_string(),
            );
            info!("Actor {} created deal #{}", actor_id, deal_id);
            SubmitOutcome::Created { deal_id }
        }
    };

    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DealStatus;

    fn walk(store: &mut EscrowStore, actor_id: i64, answers: &[&str]) -> Vec<SubmitOutcome> {
        answers
            .iter()
            .map(|a| submit_answer(store, actor_id, a).unwrap())
            .collect()
    }

    #[test]
    fn test_answer_without_open_draft_is_ignored() {
        let mut store = EscrowStore::new();
        assert_eq!(submit_answer(&mut store, 1, "hello"), None);
    }

    #[test]
    fn test_full_dialogue_creates_pending_deal() {
        let mut store = EscrowStore::new();
        assert_eq!(start_draft(&mut store, 1), PROMPT_SELLER);

        let outcomes = walk(&mut store, 1, &["2", "50", "usd", "widget"]);
        assert_eq!(
            outcomes,
            vec![
                SubmitOutcome::Prompt(PROMPT_AMOUNT),
                SubmitOutcome::Prompt(PROMPT_CURRENCY),
                SubmitOutcome::Prompt(PROMPT_DESCRIPTION),
                SubmitOutcome::Created { deal_id: 1001 },
            ]
        );

        let deal = store.deals.deal(1001).unwrap();
        assert_eq!(deal.buyer_id, 1);
        assert_eq!(deal.seller_id, 2);
        assert_eq!(deal.amount, 50.0);
        assert_eq!(deal.currency, "USD");
        assert_eq!(deal.description, "widget");
        assert_eq!(deal.status, DealStatus::Pending);
        assert!(!deal.buyer_approved && !deal.seller_approved);

        // Session is gone after completion
        assert_eq!(submit_answer(&mut store, 1, "anything"), None);
    }

    #[test]
    fn test_non_numeric_seller_does_not_advance() {
        let mut store = EscrowStore::new();
        start_draft(&mut store, 1);

        let outcome = submit_answer(&mut store, 1, "bob").unwrap();
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert_eq!(store.sessions.draft(1), Some(&DealDraft::AwaitingSeller));

        // Retry with valid input succeeds on the same step
        assert_eq!(
            submit_answer(&mut store, 1, "2").unwrap(),
            SubmitOutcome::Prompt(PROMPT_AMOUNT)
        );
    }

    #[test]
    fn test_buyer_cannot_name_themselves_as_seller() {
        let mut store = EscrowStore::new();
        start_draft(&mut store, 1);

        let outcome = submit_answer(&mut store, 1, "1").unwrap();
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert_eq!(store.sessions.draft(1), Some(&DealDraft::AwaitingSeller));
    }

    #[test]
    fn test_zero_negative_or_garbage_amount_does_not_advance() {
        let mut store = EscrowStore::new();
        start_draft(&mut store, 1);
        submit_answer(&mut store, 1, "2").unwrap();

        for bad in ["0", "-5", "abc", ""] {
            let outcome = submit_answer(&mut store, 1, bad).unwrap();
            assert!(matches!(outcome, SubmitOutcome::Invalid(_)), "input {:?}", bad);
            assert_eq!(
                store.sessions.draft(1),
                Some(&DealDraft::AwaitingAmount { seller_id: 2 })
            );
        }
    }

    #[test]
    fn test_currency_is_uppercased_and_non_empty() {
        let mut store = EscrowStore::new();
        start_draft(&mut store, 1);
        walk(&mut store, 1, &["2", "50"]);

        let outcome = submit_answer(&mut store, 1, "   ").unwrap();
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));

        submit_answer(&mut store, 1, "eur").unwrap();
        submit_answer(&mut store, 1, "desc").unwrap();
        assert_eq!(store.deals.deal(1001).unwrap().currency, "EUR");
    }

    #[test]
    fn test_create_restarts_an_in_flight_dialogue() {
        let mut store = EscrowStore::new();
        start_draft(&mut store, 1);
        walk(&mut store, 1, &["2", "50"]);

        start_draft(&mut store, 1);
        assert_eq!(store.sessions.draft(1), Some(&DealDraft::AwaitingSeller));
    }

    #[test]
    fn test_dialogues_are_per_actor() {
        let mut store = EscrowStore::new();
        start_draft(&mut store, 1);
        start_draft(&mut store, 5);

        submit_answer(&mut store, 1, "2").unwrap();
        // Actor 5 is still on the first step
        assert_eq!(store.sessions.draft(5), Some(&DealDraft::AwaitingSeller));
    }
}
