//! Prediction history service

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{PredictionKind, PredictionRecord};

/// Service for the append-only prediction history log
#[derive(Clone)]
pub struct HistoryService {
    db: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct PredictionRow {
    id: Uuid,
    kind: String,
    result: String,
    created_at: DateTime<Utc>,
}

impl PredictionRow {
    fn into_record(self) -> AppResult<PredictionRecord> {
        let kind = PredictionKind::parse(&self.kind)
            .ok_or_else(|| AppError::Internal(format!("Unknown prediction kind: {}", self.kind)))?;
        Ok(PredictionRecord {
            id: self.id,
            kind,
            result: self.result,
            created_at: self.created_at,
        })
    }
}

impl HistoryService {
    /// Create a new HistoryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Append a prediction record for a user
    pub async fn record(
        &self,
        user_id: Uuid,
        kind: PredictionKind,
        result: &str,
    ) -> AppResult<PredictionRecord> {
        let row = sqlx::query_as::<_, PredictionRow>(
            r#"
            INSERT INTO prediction_records (user_id, kind, result)
            VALUES ($1, $2, $3)
            RETURNING id, kind, result, created_at
            "#,
        )
        .bind(user_id)
        .bind(kind.as_str())
        .bind(result)
        .fetch_one(&self.db)
        .await?;

        row.into_record()
    }

    /// List a user's prediction records, newest first
    pub async fn list(&self, user_id: Uuid) -> AppResult<Vec<PredictionRecord>> {
        let rows = sqlx::query_as::<_, PredictionRow>(
            r#"
            SELECT id, kind, result, created_at
            FROM prediction_records
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(PredictionRow::into_record).collect()
    }

    /// The user's most recent records (dashboard shows 3)
    pub async fn recent(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<PredictionRecord>> {
        let rows = sqlx::query_as::<_, PredictionRow>(
            r#"
            SELECT id, kind, result, created_at
            FROM prediction_records
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(PredictionRow::into_record).collect()
    }
}
