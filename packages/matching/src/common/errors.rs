use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the matching engine.
///
/// The manual-override actions return these directly to the caller; the bulk
/// path catches the per-pair cases (`InternNotFound`, lost-race skips) and
/// keeps going.
#[derive(Error, Debug)]
pub enum MatchingError {
    #[error("Intern {0} not found")]
    InternNotFound(Uuid),

    #[error("Supervisor {0} not found")]
    SupervisorNotFound(Uuid),

    /// Conflict: the requested supervisor already holds this intern.
    #[error("This supervisor has already been assigned to this intern")]
    AlreadyAssigned {
        intern_id: Uuid,
        supervisor_id: Uuid,
    },

    /// The intern is held by a different supervisor; the caller must unassign
    /// before assigning a new one.
    #[error(
        "Intern has already been matched to a supervisor. \
         Unmatch the existing supervisor before matching a new one"
    )]
    AssignedElsewhere {
        intern_id: Uuid,
        supervisor_id: Uuid,
    },

    #[error("Intern has not been assigned a supervisor yet")]
    NotAssigned(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
