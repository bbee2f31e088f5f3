use std::collections::HashMap;

use serde::Serialize;

use super::candidate::Candidate;

/// Display-facing slice of a candidate: names, contact, department, skills.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub skills: Vec<String>,
}

impl CandidateProfile {
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            first_name: candidate.first_name.clone(),
            last_name: candidate.last_name.clone(),
            department: candidate.department.clone(),
            email: candidate.email.clone(),
            phone_number: candidate.phone_number.clone(),
            skills: candidate.skills.sorted_names(),
        }
    }
}

/// A matched intern's profile plus its percentage-formatted similarity,
/// e.g. "66.67%".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedIntern {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    pub similarity: String,
}

/// One supervisor and the interns proposed for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupervisorMatches {
    pub supervisor: CandidateProfile,
    pub interns: Vec<MatchedIntern>,
}

/// Human-facing match report, grouped by department. Never committed; built
/// for inspection before (or instead of) a bulk commit.
pub type MatchReport = HashMap<String, Vec<SupervisorMatches>>;
