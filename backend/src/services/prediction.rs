//! Prediction service: soil classification and crop recommendation

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::external::InferenceClient;
use crate::services::HistoryService;
use shared::models::{CropFeatures, PredictionKind, SoilClass};

/// Service orchestrating model inference and history recording
#[derive(Clone)]
pub struct PredictionService {
    history: HistoryService,
    inference: InferenceClient,
}

/// Result of a soil-only classification
#[derive(Debug, Serialize)]
pub struct SoilPrediction {
    pub soil_class: SoilClass,
    pub soil_label: String,
}

/// Result of a crop recommendation
#[derive(Debug, Serialize)]
pub struct CropPrediction {
    pub soil_class: SoilClass,
    pub soil_label: String,
    pub crop: String,
}

impl PredictionService {
    /// Create a new PredictionService instance
    pub fn new(db: PgPool, inference: InferenceClient) -> Self {
        Self {
            history: HistoryService::new(db),
            inference,
        }
    }

    /// Classify a soil image and record the result
    pub async fn classify_soil(
        &self,
        user_id: Uuid,
        image_bytes: &[u8],
    ) -> AppResult<SoilPrediction> {
        let soil_class = self
            .inference
            .predict_soil(BASE64.encode(image_bytes))
            .await?;
        let soil_label = soil_class.display_name().to_string();

        self.history
            .record(user_id, PredictionKind::Soil, &soil_label)
            .await?;

        Ok(SoilPrediction {
            soil_class,
            soil_label,
        })
    }

    /// Classify the soil image, then recommend a crop for it, and record the
    /// combined result
    pub async fn recommend_crop(
        &self,
        user_id: Uuid,
        image_bytes: &[u8],
        features: CropFeatures,
    ) -> AppResult<CropPrediction> {
        let soil_class = self
            .inference
            .predict_soil(BASE64.encode(image_bytes))
            .await?;
        let crop = self.inference.predict_crop(&features, soil_class).await?;

        let soil_label = soil_class.display_name().to_string();
        let summary = format!("Soil: {}, Crop: {}", soil_label, crop);
        self.history
            .record(user_id, PredictionKind::Crop, &summary)
            .await?;

        Ok(CropPrediction {
            soil_class,
            soil_label,
            crop,
        })
    }
}
