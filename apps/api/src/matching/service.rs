//! Job Matching Service — extracts skills from a resume, scores every stored job,
//! and returns the best matches.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::documents::FALLBACK_GUIDANCE;
use crate::errors::AppError;
use crate::jobs::repository::JobRepository;
use crate::matching::catalog::SkillCatalog;
use crate::matching::extractor::extract_skills;
use crate::matching::scorer::{score_job, MatchResult};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub user_skills: Vec<String>,
    pub total_skills_found: usize,
    pub matches: Vec<MatchResult>,
}

/// Matching entry point, wired with its collaborators at startup.
#[derive(Clone)]
pub struct MatchingService {
    repository: Arc<dyn JobRepository>,
    catalog: Arc<SkillCatalog>,
    limit: usize,
}

impl MatchingService {
    pub fn new(repository: Arc<dyn JobRepository>, catalog: Arc<SkillCatalog>, limit: usize) -> Self {
        Self {
            repository,
            catalog,
            limit,
        }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Ranks all stored jobs against `resume_text`.
    ///
    /// Rejects missing or empty text (and the upload fallback guidance) before
    /// touching the repository. Results are sorted by score, highest first;
    /// equal scores keep repository order. At most `limit` results are returned.
    pub async fn match_resume(&self, resume_text: Option<&str>) -> Result<MatchResponse, AppError> {
        let resume_text = validate_resume_text(resume_text)?;
        info!("Analyzing resume text, length: {}", resume_text.len());

        let user_skills = extract_skills(Some(resume_text), &self.catalog);
        debug!(skills = ?user_skills, "Skills found");

        let jobs = self.repository.find_all().await?;
        info!(
            skills_found = user_skills.len(),
            jobs = jobs.len(),
            "Scoring resume against stored jobs"
        );

        let mut matches: Vec<MatchResult> =
            jobs.iter().map(|job| score_job(&user_skills, job)).collect();
        // sort_by is stable: ties stay in retrieval order
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(self.limit);

        Ok(MatchResponse {
            total_skills_found: user_skills.len(),
            user_skills,
            matches,
        })
    }
}

fn validate_resume_text(resume_text: Option<&str>) -> Result<&str, AppError> {
    let text = resume_text.unwrap_or_default();
    if text.is_empty() {
        return Err(AppError::Validation("Resume text is required".to_string()));
    }
    if text.trim() == FALLBACK_GUIDANCE.trim() {
        return Err(AppError::Validation(
            "The uploaded document could not be read; paste the resume text instead".to_string(),
        ));
    }
    Ok(text)
}
