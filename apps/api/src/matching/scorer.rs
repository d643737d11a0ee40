//! Match Scorer — compares a candidate's extracted skills with one job's required skills.
//!
//! Pure and infallible. Comparison is case-insensitive; output always echoes the
//! job's own casing.
//!
//! score = round_half_up(100 × matched / required), 0 when the job lists no skills.

use serde::Serialize;
use uuid::Uuid;

use crate::jobs::models::JobPosting;

/// Skill overlap between a candidate and a single job's requirement list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub score: u32, // 0 – 100
}

/// Per-job result returned to callers of the match endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub job_id: Uuid,
    pub job_title: String,
    pub job_description: String,
    pub required_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub score: u32,
    pub total_required: usize,
    pub total_matched: usize,
}

/// Splits `job_skills` into matched and missing entries against `user_skills`.
pub fn score_skills(user_skills: &[String], job_skills: &[String]) -> SkillMatch {
    let user_lower: Vec<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();

    let (matched, missing): (Vec<String>, Vec<String>) = job_skills
        .iter()
        .cloned()
        .partition(|skill| user_lower.contains(&skill.to_lowercase()));

    let score = percentage(matched.len(), job_skills.len());

    SkillMatch {
        matched,
        missing,
        score,
    }
}

/// Scores one job and attaches its identifying fields.
pub fn score_job(user_skills: &[String], job: &JobPosting) -> MatchResult {
    let SkillMatch {
        matched,
        missing,
        score,
    } = score_skills(user_skills, &job.skills);

    MatchResult {
        job_id: job.id,
        job_title: job.title.clone(),
        job_description: job.description.clone(),
        required_skills: job.skills.clone(),
        total_required: job.skills.len(),
        total_matched: matched.len(),
        matched_skills: matched,
        missing_skills: missing,
        score,
    }
}

/// `100 * part / whole` rounded half-up, in integer arithmetic so .5 cases are exact.
fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u64;
    let whole = whole as u64;
    ((200 * part + whole) / (2 * whole)) as u32
}
