//! Axum route handler for the answers API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::answers::generate_answer;
use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::models::profile::UserProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub question: String,
    pub job_title: String,
    pub company: String,
    #[serde(default)]
    pub job_description: String,
    pub user_profile: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// POST /api/v1/answers
pub async fn handle_answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let job = JobPosting {
        title: request.job_title,
        company: request.company,
        location: None,
        raw_text: request.job_description,
        url: None,
    };

    let answer = generate_answer(
        &request.question,
        &job,
        &request.user_profile,
        state.chat.as_deref(),
    )
    .await?;

    Ok(Json(AnswerResponse { answer }))
}
