//! Coordinator entry points exposed to routing/admin collaborators.

pub mod bulk_matching;
pub mod manual_match;

pub use bulk_matching::{display_matches, perform_bulk_matching, BulkMatchingSummary};
pub use manual_match::{manually_match, unassign_intern, UnassignSummary};
