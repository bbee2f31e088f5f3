use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A candidate's skill profile: unique skill names, unordered.
///
/// Built once at the storage boundary from the raw name list; duplicate names
/// collapse on construction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SkillSet(HashSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self(HashSet::new())
    }

    /// Build a skill set from raw names, deduplicating as it goes.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    /// Number of skills shared with `other`.
    pub fn intersection_len(&self, other: &SkillSet) -> usize {
        self.0.intersection(&other.0).count()
    }

    /// Number of distinct skills across both sets.
    pub fn union_len(&self, other: &SkillSet) -> usize {
        self.0.union(&other.0).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Skill names sorted alphabetically, for display.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.iter().cloned().collect();
        names.sort();
        names
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_names(iter)
    }
}

/// A matchable person (intern or supervisor): identity, department scope,
/// skill profile and display fields. Validated once when read from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub department: String,
    pub skills: SkillSet,
}

/// An intern as persisted: the candidate profile plus assignment state.
///
/// `supervisor_id` is the only durable output of the engine - exactly one or
/// zero supervisors per intern at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct InternRecord {
    pub candidate: Candidate,
    pub supervisor_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl InternRecord {
    /// Whether this intern is eligible for batch matching.
    pub fn is_unmatched(&self) -> bool {
        self.supervisor_id.is_none()
    }
}
