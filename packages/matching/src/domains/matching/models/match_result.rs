use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

/// One proposed pairing: an intern and its similarity to the supervisor it is
/// grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchCandidate {
    pub intern_id: Uuid,
    /// Always within [0.0, 1.0].
    pub similarity: f64,
}

/// Matches grouped by supervisor within one department, in intern input order.
pub type DepartmentMatches = HashMap<Uuid, Vec<MatchCandidate>>;

/// The full result of one batch run: department -> supervisor -> matched
/// interns. Ephemeral - consumed immediately by the report builder or the
/// bulk-commit action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchBatch {
    pub departments: HashMap<String, DepartmentMatches>,
}

impl MatchBatch {
    /// Total number of proposed pairings across all departments.
    pub fn pair_count(&self) -> usize {
        self.departments
            .values()
            .flat_map(|by_supervisor| by_supervisor.values())
            .map(Vec::len)
            .sum()
    }

}
