use std::collections::HashMap;

use chrono::Utc;

use crate::models::{Deal, DealStatus};

/// Ids below this are reserved for pre-seeded data; the first allocated
/// deal id is `DEAL_ID_SEED + 1`.
const DEAL_ID_SEED: i64 = 1000;

/// Registry of all minted deals, keyed by id. Sole writer of deal
/// creation; deals are never deleted, terminal ones stay as history.
#[derive(Debug)]
pub struct DealRegistry {
    deals: HashMap<i64, Deal>,
    last_id: i64,
}

impl Default for DealRegistry {
    fn default() -> Self {
        Self {
            deals: HashMap::new(),
            last_id: DEAL_ID_SEED,
        }
    }
}

impl DealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a Pending deal from a finalized draft. Ids are strictly
    /// increasing and never reused.
    pub fn create_deal(
        &mut self,
        buyer_id: i64,
        seller_id: i64,
        amount: f64,
        currency: String,
        description: String,
    ) -> i64 {
        self.last_id += 1;
        let id = self.last_id;
        self.deals.insert(
            id,
            Deal {
                id,
                buyer_id,
                seller_id,
                amount,
                currency,
                description,
                status: DealStatus::Pending,
                buyer_approved: false,
                seller_approved: false,
                created_at: Utc::now(),
            },
        );
        id
    }

    pub fn deal(&self, id: i64) -> Option<&Deal> {
        self.deals.get(&id)
    }

    pub fn deal_mut(&mut self, id: i64) -> Option<&mut Deal> {
        self.deals.get_mut(&id)
    }

    /// All deals the actor is a party to, newest first
    pub fn deals_for(&self, actor_id: i64) -> Vec<&Deal> {
        let mut deals: Vec<&Deal> = self
            .deals
            .values()
            .filter(|d| d.is_party(actor_id))
            .collect();
        deals.sort_by(|a, b| b.id.cmp(&a.id));
        deals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_deal_id_is_above_reserved_range() {
        let mut registry = DealRegistry::new();
        let id = registry.create_deal(1, 2, 50.0, "USD".to_string(), "widget".to_string());
        assert_eq!(id, 1001);
    }

    #[test]
    fn test_ids_are_monotonic_and_never_reused() {
        let mut registry = DealRegistry::new();
        let a = registry.create_deal(1, 2, 10.0, "USD".to_string(), "a".to_string());
        let b = registry.create_deal(3, 4, 20.0, "EUR".to_string(), "b".to_string());
        let c = registry.create_deal(1, 4, 30.0, "USD".to_string(), "c".to_string());
        assert!(a < b && b < c);
    }

    #[test]
    fn test_new_deal_starts_pending_with_no_approvals() {
        let mut registry = DealRegistry::new();
        let id = registry.create_deal(7, 9, 125.5, "EUR".to_string(), "laptop".to_string());
        let deal = registry.deal(id).unwrap();
        assert_eq!(deal.status, DealStatus::Pending);
        assert!(!deal.buyer_approved);
        assert!(!deal.seller_approved);
        assert_eq!(deal.buyer_id, 7);
        assert_eq!(deal.seller_id, 9);
        assert_eq!(deal.amount, 125.5);
    }

    #[test]
    fn test_lookup_of_unknown_id() {
        let registry = DealRegistry::new();
        assert!(registry.deal(1001).is_none());
    }

    #[test]
    fn test_deals_for_covers_both_roles() {
        let mut registry = DealRegistry::new();
        let as_buyer = registry.create_deal(1, 2, 10.0, "USD".to_string(), "a".to_string());
        let as_seller = registry.create_deal(3, 1, 20.0, "USD".to_string(), "b".to_string());
        registry.create_deal(3, 4, 30.0, "USD".to_string(), "c".to_string());

        let deals = registry.deals_for(1);
        let ids: Vec<i64> = deals.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![as_seller, as_buyer]);
    }
}
