//! Farm ledger models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a ledger entry is money spent or money earned
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Expense,
    Income,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Expense => "expense",
            EntryKind::Income => "income",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "expense" => Some(EntryKind::Expense),
            "income" => Some(EntryKind::Income),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single expense or income entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub kind: EntryKind,
    pub name: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub entry_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Totals over a set of ledger entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total_expense: Decimal,
    pub total_income: Decimal,
    /// income minus expense
    pub balance: Decimal,
}

/// Compute totals and balance for a list of entries
pub fn summarize_ledger(entries: &[LedgerEntry]) -> LedgerSummary {
    let mut total_expense = Decimal::ZERO;
    let mut total_income = Decimal::ZERO;
    for entry in entries {
        match entry.kind {
            EntryKind::Expense => total_expense += entry.amount,
            EntryKind::Income => total_income += entry.amount,
        }
    }
    LedgerSummary {
        total_expense,
        total_income,
        balance: total_income - total_expense,
    }
}
