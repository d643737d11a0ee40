use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One job opening as stored by the job repository.
/// The matcher treats it as read-only input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Required skills, in the casing the posting was written with.
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
impl JobPosting {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        skills: Vec<String>,
    ) -> Self {
        JobPosting {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            skills,
            created_at: Utc::now(),
        }
    }
}
