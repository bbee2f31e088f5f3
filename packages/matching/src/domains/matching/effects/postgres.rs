//! Postgres-backed `MatchingStore`.
//!
//! Assignment writes are conditional UPDATEs (`... WHERE supervisor_id IS
//! NULL`), so "read unmatched roster, then write" is at-most-once per intern
//! even when a batch run races a manual assignment.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::MatchingError;
use crate::domains::matching::models::{Candidate, InternRecord, SkillSet};

use super::store::{AssignOutcome, MatchingStore};

#[derive(Debug, Clone)]
pub struct PgMatchingStore {
    pool: PgPool,
}

impl PgMatchingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SupervisorRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: Option<String>,
    department: String,
    skills: Vec<String>,
}

impl From<SupervisorRow> for Candidate {
    fn from(row: SupervisorRow) -> Self {
        Candidate {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone_number: row.phone_number,
            department: row.department,
            skills: SkillSet::from_names(row.skills),
        }
    }
}

#[derive(sqlx::FromRow)]
struct InternRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: Option<String>,
    department: String,
    skills: Vec<String>,
    supervisor_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl From<InternRow> for InternRecord {
    fn from(row: InternRow) -> Self {
        InternRecord {
            candidate: Candidate {
                id: row.id,
                first_name: row.first_name,
                last_name: row.last_name,
                email: row.email,
                phone_number: row.phone_number,
                department: row.department,
                skills: SkillSet::from_names(row.skills),
            },
            supervisor_id: row.supervisor_id,
            created_at: row.created_at,
        }
    }
}

const INTERN_COLUMNS: &str =
    "id, first_name, last_name, email, phone_number, department, skills, supervisor_id, created_at";

#[async_trait]
impl MatchingStore for PgMatchingStore {
    async fn list_supervisors(&self) -> Result<Vec<Candidate>, MatchingError> {
        let rows = sqlx::query_as::<_, SupervisorRow>(
            "SELECT id, first_name, last_name, email, phone_number, department, skills
             FROM supervisors
             ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Candidate::from).collect())
    }

    async fn list_unmatched_interns(&self) -> Result<Vec<Candidate>, MatchingError> {
        // Creation order keeps tie-breaking stable across runs.
        let rows = sqlx::query_as::<_, InternRow>(&format!(
            "SELECT {INTERN_COLUMNS}
             FROM interns
             WHERE supervisor_id IS NULL
             ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| InternRecord::from(row).candidate)
            .collect())
    }

    async fn get_intern(&self, intern_id: Uuid) -> Result<Option<InternRecord>, MatchingError> {
        let row = sqlx::query_as::<_, InternRow>(&format!(
            "SELECT {INTERN_COLUMNS} FROM interns WHERE id = $1"
        ))
        .bind(intern_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(InternRecord::from))
    }

    async fn get_supervisor(
        &self,
        supervisor_id: Uuid,
    ) -> Result<Option<Candidate>, MatchingError> {
        let row = sqlx::query_as::<_, SupervisorRow>(
            "SELECT id, first_name, last_name, email, phone_number, department, skills
             FROM supervisors
             WHERE id = $1",
        )
        .bind(supervisor_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Candidate::from))
    }

    async fn try_assign(
        &self,
        intern_id: Uuid,
        supervisor_id: Uuid,
    ) -> Result<AssignOutcome, MatchingError> {
        // Single conditional UPDATE: no row comes back when the intern is
        // gone or already claimed.
        let row = sqlx::query_as::<_, InternRow>(&format!(
            "UPDATE interns
             SET supervisor_id = $2
             WHERE id = $1 AND supervisor_id IS NULL
             RETURNING {INTERN_COLUMNS}"
        ))
        .bind(intern_id)
        .bind(supervisor_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(match row {
            Some(row) => AssignOutcome::Assigned(InternRecord::from(row)),
            None => AssignOutcome::ConditionFailed,
        })
    }

    async fn clear_assignment(&self, intern_id: Uuid) -> Result<bool, MatchingError> {
        let result = sqlx::query(
            "UPDATE interns
             SET supervisor_id = NULL
             WHERE id = $1 AND supervisor_id IS NOT NULL",
        )
        .bind(intern_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
