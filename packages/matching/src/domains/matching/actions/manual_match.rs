//! Operator-initiated assignment overrides.
//!
//! These bypass scoring but share the bulk path's write protocol, so the
//! "one active supervisor per intern" invariant holds no matter which path
//! wrote first. Every failure is surfaced to the operator as a typed error;
//! nothing is retried.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::common::MatchingError;
use crate::domains::matching::effects::{AssignOutcome, MatchingStore};
use crate::domains::matching::models::InternRecord;

#[derive(Debug, Clone, Serialize)]
pub struct UnassignSummary {
    pub detail: String,
}

/// Directly assign one intern to one supervisor.
///
/// Errors: `InternNotFound` / `SupervisorNotFound` when either id is unknown;
/// `AlreadyAssigned` when the intern already has this exact supervisor;
/// `AssignedElsewhere` when the intern has a different one (the operator must
/// unassign first).
pub async fn manually_match<S: MatchingStore>(
    store: &S,
    supervisor_id: Uuid,
    intern_id: Uuid,
) -> Result<InternRecord, MatchingError> {
    let intern = store
        .get_intern(intern_id)
        .await?
        .ok_or(MatchingError::InternNotFound(intern_id))?;

    if let Some(current) = intern.supervisor_id {
        if current == supervisor_id {
            return Err(MatchingError::AlreadyAssigned {
                intern_id,
                supervisor_id,
            });
        }
        return Err(MatchingError::AssignedElsewhere {
            intern_id,
            supervisor_id: current,
        });
    }

    if store.get_supervisor(supervisor_id).await?.is_none() {
        return Err(MatchingError::SupervisorNotFound(supervisor_id));
    }

    match store.try_assign(intern_id, supervisor_id).await? {
        AssignOutcome::Assigned(record) => {
            info!(%intern_id, %supervisor_id, "Manually assigned intern to supervisor");
            Ok(record)
        }
        // Lost the race after our checks passed: report the state the intern
        // is in now.
        AssignOutcome::ConditionFailed => {
            let current = store
                .get_intern(intern_id)
                .await?
                .ok_or(MatchingError::InternNotFound(intern_id))?;
            match current.supervisor_id {
                Some(winner) if winner == supervisor_id => {
                    Err(MatchingError::AlreadyAssigned {
                        intern_id,
                        supervisor_id,
                    })
                }
                Some(winner) => Err(MatchingError::AssignedElsewhere {
                    intern_id,
                    supervisor_id: winner,
                }),
                // Claimed and released between our write and re-read; the
                // operator can simply retry.
                None => Err(MatchingError::AssignedElsewhere {
                    intern_id,
                    supervisor_id,
                }),
            }
        }
    }
}

/// Remove an intern's current supervisor.
///
/// Errors: `InternNotFound` when the id is unknown; `NotAssigned` when there
/// is no relationship to clear (including when a concurrent writer cleared it
/// first).
pub async fn unassign_intern<S: MatchingStore>(
    store: &S,
    intern_id: Uuid,
) -> Result<UnassignSummary, MatchingError> {
    let intern = store
        .get_intern(intern_id)
        .await?
        .ok_or(MatchingError::InternNotFound(intern_id))?;

    if intern.supervisor_id.is_none() {
        return Err(MatchingError::NotAssigned(intern_id));
    }

    if !store.clear_assignment(intern_id).await? {
        return Err(MatchingError::NotAssigned(intern_id));
    }

    info!(%intern_id, "Unmatched intern from supervisor");
    Ok(UnassignSummary {
        detail: "Successfully unmatched intern from supervisor".to_string(),
    })
}
