//! Human-facing rendering of a match batch.

use std::collections::HashMap;

use uuid::Uuid;

use crate::domains::matching::models::{
    Candidate, CandidateProfile, MatchBatch, MatchReport, MatchedIntern, SupervisorMatches,
};

/// Render a similarity as a percentage, e.g. `0.6667` -> `"66.67%"`.
pub fn format_similarity(similarity: f64) -> String {
    format!("{:.2}%", similarity * 100.0)
}

/// Build the per-department display report for a batch.
///
/// Pure transformation over the same roster snapshot the batch was computed
/// from; pairs whose candidate has since left the snapshot are skipped.
pub fn build_report(
    batch: &MatchBatch,
    supervisors: &[Candidate],
    interns: &[Candidate],
) -> MatchReport {
    let supervisor_map: HashMap<Uuid, &Candidate> =
        supervisors.iter().map(|s| (s.id, s)).collect();
    let intern_map: HashMap<Uuid, &Candidate> = interns.iter().map(|i| (i.id, i)).collect();

    let mut report = MatchReport::new();

    for (department, department_matches) in &batch.departments {
        for (supervisor_id, intern_matches) in department_matches {
            let Some(supervisor) = supervisor_map.get(supervisor_id) else {
                continue;
            };

            let interns: Vec<MatchedIntern> = intern_matches
                .iter()
                .filter_map(|m| {
                    intern_map.get(&m.intern_id).map(|intern| MatchedIntern {
                        profile: CandidateProfile::from_candidate(intern),
                        similarity: format_similarity(m.similarity),
                    })
                })
                .collect();

            report
                .entry(department.clone())
                .or_default()
                .push(SupervisorMatches {
                    supervisor: CandidateProfile::from_candidate(supervisor),
                    interns,
                });
        }
    }

    report
}
