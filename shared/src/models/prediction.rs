//! Prediction history models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which classifier produced a history record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PredictionKind {
    Soil,
    Crop,
}

impl PredictionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionKind::Soil => "soil",
            PredictionKind::Crop => "crop",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "soil" => Some(PredictionKind::Soil),
            "crop" => Some(PredictionKind::Crop),
            _ => None,
        }
    }
}

/// A recorded prediction result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: Uuid,
    pub kind: PredictionKind,
    pub result: String,
    pub created_at: DateTime<Utc>,
}

/// Numeric features the crop recommendation model consumes, alongside the
/// encoded soil class
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CropFeatures {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}
