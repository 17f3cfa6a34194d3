//! Axum route handlers for the analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::models::report::MatchReport;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub job_title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    pub job_description: String,
    pub resume_text: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// POST /api/v1/analyze
///
/// Scores a resume against a job posting, applying the caller's stored
/// preferences when a `user_id` is supplied, and records an application row.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<MatchReport>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let job = JobPosting {
        title: request.job_title,
        company: request.company,
        location: request.location,
        raw_text: request.job_description,
        url: request.url.clone(),
    };

    let prefs = match &request.user_id {
        Some(user_id) => store::get_preferences(&state.db, user_id).await?,
        None => None,
    };

    let report = state
        .scorer
        .score(&request.resume_text, &job, prefs.as_ref())
        .await;

    info!(
        score = report.match_score,
        company = %job.company,
        "analysis complete"
    );

    store::insert_application(
        &state.db,
        &job.title,
        &job.company,
        report.match_score,
        request.url.as_deref().or(Some("Manual Entry")),
    )
    .await?;

    Ok(Json(report))
}
