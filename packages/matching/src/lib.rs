// Internship Platform - Matching Core
//
// This crate implements the supervisor-intern matching engine: set-similarity
// scoring over skill profiles, per-department greedy assignment, and race-safe
// persistence of the resulting supervisor relationships.
//
// The surrounding platform (routing, auth, CRUD repositories) talks to this
// crate through the actions in domains/matching/actions and the MatchingStore
// storage seam in domains/matching/effects.

pub mod common;
pub mod config;
pub mod domains;

pub use config::*;
