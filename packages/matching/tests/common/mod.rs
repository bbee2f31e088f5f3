//! Test harness: an in-memory `MatchingStore` with the same conditional-write
//! semantics as the Postgres store, plus a hook for injecting a concurrent
//! writer between a roster read and the assignment write.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use matching_core::common::MatchingError;
use matching_core::domains::matching::effects::{AssignOutcome, MatchingStore};
use matching_core::domains::matching::models::{Candidate, InternRecord, SkillSet};

pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    supervisors: Vec<Candidate>,
    interns: Vec<InternRecord>,
    /// intern id -> supervisor a "concurrent writer" assigns just before our
    /// next conditional write for that intern executes.
    racing_writers: HashMap<Uuid, Uuid>,
    assign_writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                supervisors: Vec::new(),
                interns: Vec::new(),
                racing_writers: HashMap::new(),
                assign_writes: 0,
            }),
        }
    }

    pub async fn add_supervisor(&self, supervisor: Candidate) {
        self.inner.lock().await.supervisors.push(supervisor);
    }

    pub async fn add_intern(&self, intern: Candidate) {
        self.inner.lock().await.interns.push(InternRecord {
            candidate: intern,
            supervisor_id: None,
            created_at: Utc::now(),
        });
    }

    /// Arrange for `supervisor_id` to win the write race for `intern_id`:
    /// the next `try_assign` against that intern finds it already claimed.
    pub async fn inject_racing_writer(&self, intern_id: Uuid, supervisor_id: Uuid) {
        self.inner
            .lock()
            .await
            .racing_writers
            .insert(intern_id, supervisor_id);
    }

    /// Number of successful assignment writes so far.
    pub async fn assign_writes(&self) -> usize {
        self.inner.lock().await.assign_writes
    }

    pub async fn supervisor_of(&self, intern_id: Uuid) -> Option<Uuid> {
        self.inner
            .lock()
            .await
            .interns
            .iter()
            .find(|i| i.candidate.id == intern_id)
            .and_then(|i| i.supervisor_id)
    }
}

#[async_trait]
impl MatchingStore for InMemoryStore {
    async fn list_supervisors(&self) -> Result<Vec<Candidate>, MatchingError> {
        Ok(self.inner.lock().await.supervisors.clone())
    }

    async fn list_unmatched_interns(&self) -> Result<Vec<Candidate>, MatchingError> {
        Ok(self
            .inner
            .lock()
            .await
            .interns
            .iter()
            .filter(|i| i.is_unmatched())
            .map(|i| i.candidate.clone())
            .collect())
    }

    async fn get_intern(&self, intern_id: Uuid) -> Result<Option<InternRecord>, MatchingError> {
        Ok(self
            .inner
            .lock()
            .await
            .interns
            .iter()
            .find(|i| i.candidate.id == intern_id)
            .cloned())
    }

    async fn get_supervisor(
        &self,
        supervisor_id: Uuid,
    ) -> Result<Option<Candidate>, MatchingError> {
        Ok(self
            .inner
            .lock()
            .await
            .supervisors
            .iter()
            .find(|s| s.id == supervisor_id)
            .cloned())
    }

    async fn try_assign(
        &self,
        intern_id: Uuid,
        supervisor_id: Uuid,
    ) -> Result<AssignOutcome, MatchingError> {
        let mut inner = self.inner.lock().await;

        // A concurrent writer slips in first, if one was injected.
        if let Some(winner) = inner.racing_writers.remove(&intern_id) {
            if let Some(intern) = inner
                .interns
                .iter_mut()
                .find(|i| i.candidate.id == intern_id && i.supervisor_id.is_none())
            {
                intern.supervisor_id = Some(winner);
            }
        }

        let Some(intern) = inner
            .interns
            .iter_mut()
            .find(|i| i.candidate.id == intern_id)
        else {
            return Ok(AssignOutcome::ConditionFailed);
        };

        if intern.supervisor_id.is_some() {
            return Ok(AssignOutcome::ConditionFailed);
        }

        intern.supervisor_id = Some(supervisor_id);
        let record = intern.clone();
        inner.assign_writes += 1;
        Ok(AssignOutcome::Assigned(record))
    }

    async fn clear_assignment(&self, intern_id: Uuid) -> Result<bool, MatchingError> {
        let mut inner = self.inner.lock().await;
        match inner
            .interns
            .iter_mut()
            .find(|i| i.candidate.id == intern_id && i.supervisor_id.is_some())
        {
            Some(intern) => {
                intern.supervisor_id = None;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Roster builder shorthand for tests.
pub fn candidate(first_name: &str, department: &str, skills: &[&str]) -> Candidate {
    Candidate {
        id: Uuid::new_v4(),
        first_name: first_name.into(),
        last_name: "Okafor".into(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone_number: None,
        department: department.into(),
        skills: SkillSet::from_names(skills.iter().copied()),
    }
}
