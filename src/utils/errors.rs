use thiserror::Error;

/// Recoverable per-event failures, rendered as a reply to the actor.
/// Nothing here crashes the process; the actor resends corrected input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EscrowError {
    /// No deal with the requested id
    #[error("Deal not found")]
    NotFound,
    /// The actor is not a party to the deal. The message deliberately
    /// does not confirm or deny that the deal exists.
    #[error("Not your deal")]
    Unauthorized,
}
