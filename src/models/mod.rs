//! Data models for escrow commands and services
//!
//! This module organizes the entity types and the result structs passed
//! between the service layer and the command handlers.

pub mod deal;
pub mod draft;

// Re-export commonly used types for convenience
pub use deal::{ActionOutcome, Deal, DealAction, DealInfo, DealStatus, DealSummary};
pub use draft::{DealDraft, SubmitOutcome};
