//! Greedy per-department matching.
//!
//! Each intern is matched independently to its single best-scoring supervisor
//! in the same department. The running best only moves on strict improvement
//! over an initial -1.0, so the first supervisor to reach the maximum keeps
//! ties - given a stable roster order the outcome is deterministic, and a
//! supervisor with zero overlap is still assigned when nothing scores higher.
//! `O(S × I)` comparisons per department; this runs as a batch job, not on a
//! request hot path.

use std::collections::HashMap;

use crate::domains::matching::models::{Candidate, DepartmentMatches, MatchBatch, MatchCandidate};

use super::partition::partition_by_department;
use super::similarity::SimilarityScorer;

/// Match every intern in one department bucket to its best supervisor.
///
/// Interns are processed in input order; an intern in a bucket with no
/// supervisors produces no entry (there is nothing to assign it to).
pub fn match_bucket(
    supervisors: &[&Candidate],
    interns: &[&Candidate],
    scorer: &impl SimilarityScorer,
) -> DepartmentMatches {
    let mut matches: DepartmentMatches = HashMap::new();

    for intern in interns {
        let mut best_supervisor = None;
        let mut best_score = -1.0;

        for supervisor in supervisors {
            let score = scorer.score(&intern.skills, &supervisor.skills);
            if score > best_score {
                best_score = score;
                best_supervisor = Some(supervisor.id);
            }
        }

        if let Some(supervisor_id) = best_supervisor {
            matches
                .entry(supervisor_id)
                .or_default()
                .push(MatchCandidate {
                    intern_id: intern.id,
                    similarity: best_score,
                });
        }
    }

    matches
}

/// Partition both rosters by department and greedily match within each
/// bucket. Cross-department pairs never appear in the output.
pub fn run_matching(
    all_supervisors: &[Candidate],
    all_interns: &[Candidate],
    scorer: &impl SimilarityScorer,
) -> MatchBatch {
    let buckets = partition_by_department(all_supervisors, all_interns);

    let departments = buckets
        .into_iter()
        .map(|(department, bucket)| {
            let matches = match_bucket(&bucket.supervisors, &bucket.interns, scorer);
            (department, matches)
        })
        .collect();

    MatchBatch { departments }
}
