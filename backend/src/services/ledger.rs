//! Farm ledger service for expense and income tracking

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{summarize_ledger, EntryKind, LedgerEntry, LedgerSummary};
use shared::types::DateRange;
use shared::validation::validate_amount;

/// Ledger service for managing expense and income entries
#[derive(Clone)]
pub struct LedgerService {
    db: PgPool,
}

/// Input for creating a ledger entry
#[derive(Debug, Deserialize)]
pub struct CreateEntryInput {
    pub kind: EntryKind,
    pub name: String,
    pub description: Option<String>,
    pub amount: Decimal,
    /// Defaults to today when absent
    pub entry_date: Option<NaiveDate>,
}

/// Ledger entry row as stored
#[derive(Debug, sqlx::FromRow)]
struct LedgerRow {
    id: Uuid,
    kind: String,
    name: String,
    description: Option<String>,
    amount: Decimal,
    entry_date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl LedgerRow {
    fn into_entry(self) -> AppResult<LedgerEntry> {
        let kind = EntryKind::parse(&self.kind)
            .ok_or_else(|| AppError::Internal(format!("Unknown entry kind: {}", self.kind)))?;
        Ok(LedgerEntry {
            id: self.id,
            kind,
            name: self.name,
            description: self.description,
            amount: self.amount,
            entry_date: self.entry_date,
            created_at: self.created_at,
        })
    }
}

impl LedgerService {
    /// Create a new LedgerService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record an expense or income entry
    pub async fn create_entry(
        &self,
        user_id: Uuid,
        input: CreateEntryInput,
    ) -> AppResult<LedgerEntry> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Entry name cannot be empty".to_string(),
            });
        }
        if let Err(message) = validate_amount(input.amount) {
            return Err(AppError::Validation {
                field: "amount".to_string(),
                message: message.to_string(),
            });
        }

        let entry_date = input.entry_date.unwrap_or_else(|| Utc::now().date_naive());

        let row = sqlx::query_as::<_, LedgerRow>(
            r#"
            INSERT INTO ledger_entries (user_id, kind, name, description, amount, entry_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, kind, name, description, amount, entry_date, created_at
            "#,
        )
        .bind(user_id)
        .bind(input.kind.as_str())
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.amount)
        .bind(entry_date)
        .fetch_one(&self.db)
        .await?;

        row.into_entry()
    }

    /// List a user's entries, newest entry date first, optionally bounded by
    /// an inclusive date range
    pub async fn list_entries(
        &self,
        user_id: Uuid,
        range: &DateRange,
    ) -> AppResult<Vec<LedgerEntry>> {
        let rows = sqlx::query_as::<_, LedgerRow>(
            r#"
            SELECT id, kind, name, description, amount, entry_date, created_at
            FROM ledger_entries
            WHERE user_id = $1
              AND ($2::date IS NULL OR entry_date >= $2)
              AND ($3::date IS NULL OR entry_date <= $3)
            ORDER BY entry_date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(LedgerRow::into_entry).collect()
    }

    /// Totals over a user's entries for the given range
    pub async fn summary(&self, user_id: Uuid, range: &DateRange) -> AppResult<LedgerSummary> {
        let entries = self.list_entries(user_id, range).await?;
        Ok(summarize_ledger(&entries))
    }

    /// Delete a user's entry by id
    pub async fn delete_entry(&self, user_id: Uuid, entry_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM ledger_entries WHERE id = $1 AND user_id = $2")
            .bind(entry_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Ledger entry".to_string()));
        }

        Ok(())
    }
}
