//! Axum route handlers for application history and preference storage.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::preferences::PreferenceSet;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Deserialize)]
pub struct SavePreferencesRequest {
    pub user_id: String,
    #[serde(flatten)]
    pub preferences: PreferenceSet,
}

/// GET /api/v1/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<store::ApplicationRow>>, AppError> {
    let rows = store::list_applications(&state.db).await?;
    Ok(Json(rows))
}

/// POST /api/v1/preferences
pub async fn handle_save_preferences(
    State(state): State<AppState>,
    Json(request): Json<SavePreferencesRequest>,
) -> Result<Json<Value>, AppError> {
    if request.user_id.trim().is_empty() {
        return Err(AppError::Validation("user_id cannot be empty".to_string()));
    }

    store::upsert_preferences(&state.db, &request.user_id, &request.preferences).await?;

    Ok(Json(json!({ "status": "saved" })))
}

/// GET /api/v1/preferences/:user_id
pub async fn handle_get_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<PreferenceSet>, AppError> {
    match store::get_preferences(&state.db, &user_id).await? {
        Some(prefs) => Ok(Json(prefs)),
        None => Err(AppError::NotFound(format!(
            "No preferences stored for user '{user_id}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_state() -> AppState {
        AppState::for_tests().await
    }

    #[tokio::test]
    async fn test_save_then_get_preferences() {
        let state = test_state().await;
        let request: SavePreferencesRequest = serde_json::from_str(
            r#"{"user_id": "user-1", "field": "python", "remote_preference": true}"#,
        )
        .unwrap();

        handle_save_preferences(State(state.clone()), Json(request))
            .await
            .unwrap();

        let prefs = handle_get_preferences(State(state), Path("user-1".to_string()))
            .await
            .unwrap();
        assert_eq!(prefs.0.field, "python");
        assert!(prefs.0.remote_preference);
    }

    #[tokio::test]
    async fn test_get_preferences_for_unknown_user_is_not_found() {
        let state = test_state().await;
        let err = handle_get_preferences(State(state), Path("nobody".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_save_preferences_rejects_blank_user_id() {
        let state = test_state().await;
        let request = SavePreferencesRequest {
            user_id: "  ".to_string(),
            preferences: PreferenceSet::default(),
        };
        let err = handle_save_preferences(State(state), Json(request))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
