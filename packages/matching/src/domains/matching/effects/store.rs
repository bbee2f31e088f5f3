//! The narrow storage contract the matching engine consumes.
//!
//! Everything durable lives behind this trait: roster reads and the
//! conditional assignment writes. The actions are written against it so they
//! can run on Postgres in production and an in-memory store in tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::common::MatchingError;
use crate::domains::matching::models::{Candidate, InternRecord};

/// Result of a conditional assignment write.
#[derive(Debug, Clone)]
pub enum AssignOutcome {
    /// The precondition held and the relationship was written; carries the
    /// updated intern record.
    Assigned(InternRecord),
    /// The precondition no longer held at write time - the intern was deleted
    /// or another writer already claimed it. Never an error by itself: the
    /// bulk path skips, the manual path re-reads to report the real state.
    ConditionFailed,
}

impl AssignOutcome {
    pub fn is_assigned(&self) -> bool {
        matches!(self, AssignOutcome::Assigned(_))
    }
}

/// Storage collaborator for the matching engine.
#[async_trait]
pub trait MatchingStore: Send + Sync {
    /// Full supervisor roster with skill profiles.
    async fn list_supervisors(&self) -> Result<Vec<Candidate>, MatchingError>;

    /// Interns with no current supervisor, in stable (creation) order.
    /// Interns that already have a supervisor must not appear.
    async fn list_unmatched_interns(&self) -> Result<Vec<Candidate>, MatchingError>;

    async fn get_intern(&self, intern_id: Uuid) -> Result<Option<InternRecord>, MatchingError>;

    async fn get_supervisor(&self, supervisor_id: Uuid)
        -> Result<Option<Candidate>, MatchingError>;

    /// Atomically set `supervisor_id` on the intern, conditional on the
    /// intern currently having none. The check-and-set must be a single
    /// storage operation, not a read followed by a write.
    async fn try_assign(
        &self,
        intern_id: Uuid,
        supervisor_id: Uuid,
    ) -> Result<AssignOutcome, MatchingError>;

    /// Atomically clear the intern's supervisor, conditional on one being
    /// set. Returns whether a relationship was actually cleared.
    async fn clear_assignment(&self, intern_id: Uuid) -> Result<bool, MatchingError>;
}
