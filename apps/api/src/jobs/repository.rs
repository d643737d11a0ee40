//! Job Repository — the persistence collaborator the matcher loads postings from.
//!
//! `AppState` holds an `Arc<dyn JobRepository>`: `PgJobRepository` in the running
//! service, the in-memory doubles in `testing` under test.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::jobs::models::JobPosting;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read access to the job collection. No filtering, paging, or sorting is
/// pushed down; callers always load the entire collection.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Returns every job posting in a stable retrieval order.
    async fn find_all(&self) -> Result<Vec<JobPosting>, RepositoryError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL
// ────────────────────────────────────────────────────────────────────────────

pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn find_all(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        let jobs = sqlx::query_as::<_, JobPosting>(
            "SELECT id, title, description, skills, created_at FROM jobs ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }
}
