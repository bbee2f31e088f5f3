//! Storage seam for the matching domain.

pub mod postgres;
pub mod store;

pub use postgres::PgMatchingStore;
pub use store::{AssignOutcome, MatchingStore};
