//! Matching domain - pairs unmatched interns with supervisors by skill overlap
//!
//! Data flow: rosters are read through the `MatchingStore` seam, partitioned
//! into per-department buckets, greedily matched within each bucket, then
//! either rendered as a report (`display_matches`) or committed with
//! conditional writes (`perform_bulk_matching`). Manual overrides share the
//! same write protocol but bypass scoring.

pub mod actions;
pub mod effects;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use effects::{AssignOutcome, MatchingStore, PgMatchingStore};
pub use models::{Candidate, InternRecord, MatchBatch, MatchCandidate, SkillSet};
