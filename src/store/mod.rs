//! In-memory state for deals and create-dialogue sessions.
//!
//! Replaces a database layer on purpose: the registry lives for the
//! process lifetime and durability across restarts is not guaranteed.
//! The store has a single-writer model — each event handler locks it,
//! mutates, and drops the lock before sending any reply.

pub mod deals;
pub mod sessions;

pub use deals::DealRegistry;
pub use sessions::SessionStore;

/// Process-wide mutable state, injected into handlers through the
/// serenity client `TypeMap`
#[derive(Debug, Default)]
pub struct EscrowStore {
    pub deals: DealRegistry,
    pub sessions: SessionStore,
}

impl EscrowStore {
    pub fn new() -> Self {
        Self::default()
    }
}
