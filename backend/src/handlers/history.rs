//! HTTP handlers for prediction history

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::HistoryService;
use crate::AppState;
use shared::models::PredictionRecord;

/// List the user's prediction records, newest first
pub async fn list_history(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<PredictionRecord>>> {
    let service = HistoryService::new(state.db);
    let records = service.list(current_user.0.user_id).await?;
    Ok(Json(records))
}
