//! Deal entity and approval protocol models

use chrono::{DateTime, Utc};

/// Lifecycle status of a deal. Completed and Rejected are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealStatus {
    Pending,
    Completed,
    Rejected,
}

impl DealStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealStatus::Pending => "pending",
            DealStatus::Completed => "completed",
            DealStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, DealStatus::Pending)
    }
}

/// The persistent escrow agreement between a buyer and a seller.
///
/// Terms (amount, currency, description) are fixed at creation; only the
/// status and the two approval flags change afterwards, and only through
/// the approval protocol in `deal_service`.
#[derive(Debug, Clone)]
pub struct Deal {
    pub id: i64,
    pub buyer_id: i64,
    pub seller_id: i64,
    pub amount: f64,
    pub currency: String,
    pub description: String,
    pub status: DealStatus,
    pub buyer_approved: bool,
    pub seller_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Deal {
    pub fn is_party(&self, actor_id: i64) -> bool {
        actor_id == self.buyer_id || actor_id == self.seller_id
    }
}

/// Approve/reject request decoded from a button custom id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealAction {
    Approve(i64),
    Reject(i64),
}

impl DealAction {
    /// Parse a button custom id of the form `approve_<id>` / `reject_<id>`.
    /// Anything malformed is dropped here, before it reaches the protocol.
    pub fn parse(custom_id: &str) -> Option<DealAction> {
        let (action, id) = custom_id.split_once('_')?;
        let id = id.parse::<i64>().ok()?;
        match action {
            "approve" => Some(DealAction::Approve(id)),
            "reject" => Some(DealAction::Reject(id)),
            _ => None,
        }
    }

    pub fn deal_id(&self) -> i64 {
        match self {
            DealAction::Approve(id) | DealAction::Reject(id) => *id,
        }
    }
}

/// Outcome of an authorized approve/reject action
#[derive(Debug, PartialEq)]
pub enum ActionOutcome {
    /// Both parties have approved; the deal just completed
    Completed { deal_id: i64 },
    /// The acting party approved; the counterparty has not yet
    WaitingCounterparty { deal_id: i64 },
    /// Either party rejected; the deal is finished
    Rejected { deal_id: i64 },
    /// The deal was already terminal; nothing changed
    AlreadySettled { deal_id: i64, status: DealStatus },
}

/// Deal details shown to a party by `$deal <id>`
#[derive(Debug)]
pub struct DealInfo {
    pub id: i64,
    pub amount: String,
    pub currency: String,
    pub status: DealStatus,
}

/// One row of the `$mydeals` listing
#[derive(Debug)]
pub struct DealSummary {
    pub id: i64,
    pub amount: String,
    pub currency: String,
    pub role: &'static str,
    pub status: DealStatus,
    pub created: String,
}
