use std::collections::HashMap;

use crate::models::DealDraft;

/// Open create-dialogue sessions, at most one per actor.
///
/// Idle drafts never expire; `open` on an actor with a live draft
/// discards the old one and starts over.
#[derive(Debug, Default)]
pub struct SessionStore {
    drafts: HashMap<i64, DealDraft>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh draft for the actor, replacing any unfinished one
    pub fn open(&mut self, actor_id: i64) {
        self.drafts.insert(actor_id, DealDraft::AwaitingSeller);
    }

    pub fn draft(&self, actor_id: i64) -> Option<&DealDraft> {
        self.drafts.get(&actor_id)
    }

    /// Advance the actor's draft to its next step
    pub fn put(&mut self, actor_id: i64, draft: DealDraft) {
        self.drafts.insert(actor_id, draft);
    }

    /// Close the actor's session, returning the draft if one was open
    pub fn close(&mut self, actor_id: i64) -> Option<DealDraft> {
        self.drafts.remove(&actor_id)
    }
}
