//! Pure matching logic - no side effects, no storage access.

pub mod greedy;
pub mod partition;
pub mod report;
pub mod similarity;

pub use greedy::{match_bucket, run_matching};
pub use partition::{partition_by_department, DepartmentBucket};
pub use report::build_report;
pub use similarity::{SetSimilarity, SimilarityScorer};
