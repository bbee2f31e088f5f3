pub mod candidate;
pub mod match_result;
pub mod report;

pub use candidate::{Candidate, InternRecord, SkillSet};
pub use match_result::{DepartmentMatches, MatchBatch, MatchCandidate};
pub use report::{CandidateProfile, MatchReport, MatchedIntern, SupervisorMatches};
