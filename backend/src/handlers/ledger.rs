//! HTTP handlers for the farm ledger

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::ledger::CreateEntryInput;
use crate::services::LedgerService;
use crate::AppState;
use shared::models::{LedgerEntry, LedgerSummary};
use shared::types::DateRange;

/// Query parameters for listing ledger entries
#[derive(Debug, Deserialize)]
pub struct LedgerQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Entries plus totals over the same filter
#[derive(Debug, Serialize)]
pub struct LedgerListResponse {
    pub entries: Vec<LedgerEntry>,
    pub summary: LedgerSummary,
}

/// List ledger entries with totals, optionally bounded by a date range
pub async fn list_ledger_entries(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<LedgerQuery>,
) -> AppResult<Json<LedgerListResponse>> {
    let service = LedgerService::new(state.db);
    let range = DateRange::new(query.start_date, query.end_date);

    let entries = service
        .list_entries(current_user.0.user_id, &range)
        .await?;
    let summary = shared::models::summarize_ledger(&entries);

    Ok(Json(LedgerListResponse { entries, summary }))
}

/// Record an expense or income entry
pub async fn create_ledger_entry(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateEntryInput>,
) -> AppResult<(StatusCode, Json<LedgerEntry>)> {
    let service = LedgerService::new(state.db);
    let entry = service.create_entry(current_user.0.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Delete one of the user's ledger entries
pub async fn delete_ledger_entry(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(entry_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = LedgerService::new(state.db);
    service
        .delete_entry(current_user.0.user_id, entry_id)
        .await?;
    Ok(Json(()))
}
