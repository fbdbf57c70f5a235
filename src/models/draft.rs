//! Draft deal under construction by the `$create` dialogue

/// One actor's in-progress deal dialogue.
///
/// Answers accumulate strictly in step order; a satisfied step never
/// re-opens. The variant data carries everything collected so far, so a
/// draft can never reach a later step with an earlier field missing.
#[derive(Debug, Clone, PartialEq)]
pub enum DealDraft {
    AwaitingSeller,
    AwaitingAmount {
        seller_id: i64,
    },
    AwaitingCurrency {
        seller_id: i64,
        amount: f64,
    },
    AwaitingDescription {
        seller_id: i64,
        amount: f64,
        currency: String,
    },
}

/// Result of feeding one line of input to an open draft
#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Step advanced; reply with the next prompt
    Prompt(&'static str),
    /// Input rejected; step and collected fields unchanged
    Invalid(&'static str),
    /// Final step answered; the draft became a deal and the session closed
    Created { deal_id: i64 },
}
