//! Shared types used across the matching domain.

pub mod errors;

pub use errors::MatchingError;
