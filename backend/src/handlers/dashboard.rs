//! HTTP handler for the dashboard summary

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::{HistoryService, LedgerService};
use crate::AppState;
use shared::models::{LedgerSummary, PredictionRecord};
use shared::types::DateRange;

/// Number of recent predictions shown on the dashboard
const RECENT_PREDICTIONS: i64 = 3;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub recent_predictions: Vec<PredictionRecord>,
    pub ledger: LedgerSummary,
}

/// Dashboard: recent predictions plus all-time ledger totals
pub async fn get_dashboard(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<DashboardResponse>> {
    let history = HistoryService::new(state.db.clone());
    let ledger = LedgerService::new(state.db);

    let recent_predictions = history
        .recent(current_user.0.user_id, RECENT_PREDICTIONS)
        .await?;
    let summary = ledger
        .summary(current_user.0.user_id, &DateRange::default())
        .await?;

    Ok(Json(DashboardResponse {
        recent_predictions,
        ledger: summary,
    }))
}
