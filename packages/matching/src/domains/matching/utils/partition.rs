//! Per-department roster partitioning.

use std::collections::HashMap;

use crate::domains::matching::models::Candidate;

/// One department's slice of both rosters. Either side may be empty when a
/// department appears in only one roster.
#[derive(Debug, Default)]
pub struct DepartmentBucket<'a> {
    pub supervisors: Vec<&'a Candidate>,
    pub interns: Vec<&'a Candidate>,
}

/// Group both rosters into disjoint buckets keyed by exact department value.
///
/// The key set is the union of departments present in either roster. Within a
/// bucket, candidates keep their input-roster order - the matcher's tie-break
/// depends on it.
pub fn partition_by_department<'a>(
    supervisors: &'a [Candidate],
    interns: &'a [Candidate],
) -> HashMap<String, DepartmentBucket<'a>> {
    let mut buckets: HashMap<String, DepartmentBucket<'a>> = HashMap::new();

    for supervisor in supervisors {
        buckets
            .entry(supervisor.department.clone())
            .or_default()
            .supervisors
            .push(supervisor);
    }

    for intern in interns {
        buckets
            .entry(intern.department.clone())
            .or_default()
            .interns
            .push(intern);
    }

    buckets
}
