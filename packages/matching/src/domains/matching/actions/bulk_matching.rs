//! Batch matching: score whole rosters, then commit or display.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::common::MatchingError;
use crate::domains::matching::effects::{AssignOutcome, MatchingStore};
use crate::domains::matching::models::MatchReport;
use crate::domains::matching::utils::report::build_report;
use crate::domains::matching::utils::run_matching;
use crate::domains::matching::utils::similarity::SetSimilarity;

/// Caller-visible result of a bulk run. Per-pair skips are observable in the
/// logs only; the summary stays a blanket success so one bad pairing never
/// fails the batch.
#[derive(Debug, Clone, Serialize)]
pub struct BulkMatchingSummary {
    pub detail: String,
}

impl BulkMatchingSummary {
    fn success() -> Self {
        Self {
            detail: "Matching performed successfully".to_string(),
        }
    }
}

/// Run the full pipeline and commit every assignment it can.
///
/// Each pairing succeeds or is skipped independently: an intern that vanished
/// or was claimed by a concurrent writer between the roster read and the
/// conditional write is logged and skipped, and the batch carries on. Running
/// this twice back-to-back performs zero writes on the second run - the
/// unmatched-intern read already excludes everyone the first run assigned.
pub async fn perform_bulk_matching<S: MatchingStore>(
    store: &S,
) -> Result<BulkMatchingSummary, MatchingError> {
    let supervisors = store.list_supervisors().await?;
    let unmatched_interns = store.list_unmatched_interns().await?;

    let batch = run_matching(&supervisors, &unmatched_interns, &SetSimilarity::Jaccard);

    let mut assigned = 0usize;
    let mut skipped = 0usize;

    for (department, department_matches) in &batch.departments {
        info!(department = %department, "Matching for department");

        for (supervisor_id, intern_matches) in department_matches {
            for intern_match in intern_matches {
                match store
                    .try_assign(intern_match.intern_id, *supervisor_id)
                    .await?
                {
                    AssignOutcome::Assigned(record) => {
                        debug!(
                            intern_id = %record.candidate.id,
                            supervisor_id = %supervisor_id,
                            similarity = intern_match.similarity,
                            "Assigned intern to supervisor"
                        );
                        assigned += 1;
                    }
                    AssignOutcome::ConditionFailed => {
                        warn!(
                            intern_id = %intern_match.intern_id,
                            supervisor_id = %supervisor_id,
                            "Intern no longer assignable, skipping"
                        );
                        skipped += 1;
                    }
                }
            }
        }
    }

    info!(assigned, skipped, "Bulk matching complete");
    Ok(BulkMatchingSummary::success())
}

/// Score the rosters and return the human-readable report without committing
/// anything.
pub async fn display_matches<S: MatchingStore>(store: &S) -> Result<MatchReport, MatchingError> {
    let supervisors = store.list_supervisors().await?;
    let unmatched_interns = store.list_unmatched_interns().await?;

    let batch = run_matching(&supervisors, &unmatched_interns, &SetSimilarity::Jaccard);
    debug!(pairs = batch.pair_count(), "Computed match batch for display");

    Ok(build_report(&batch, &supervisors, &unmatched_interns))
}
