//! Model inference client
//!
//! Client for the externally hosted classification models. Both models are
//! opaque: the soil classifier takes an image and returns one of seven soil
//! labels, the crop recommender takes numeric features plus the encoded soil
//! class and returns a crop label.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use shared::models::{CropFeatures, SoilClass};

/// Client for the model inference service
#[derive(Clone)]
pub struct InferenceClient {
    api_endpoint: String,
    api_key: String,
    http_client: Client,
}

/// Request to classify a soil image
#[derive(Debug, Serialize)]
pub struct ClassifySoilRequest {
    pub image_base64: String,
}

/// Response from the soil classification model
#[derive(Debug, Deserialize)]
pub struct ClassifySoilResponse {
    /// Model output label, e.g. "Alluvial_Soil"
    pub label: String,
    pub confidence: Option<f32>,
}

/// Request to recommend a crop
#[derive(Debug, Serialize)]
pub struct RecommendCropRequest {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
    /// Label-encoder index of the soil class
    pub soil_encoded: u8,
}

/// Response from the crop recommendation model
#[derive(Debug, Deserialize)]
pub struct RecommendCropResponse {
    pub label: String,
}

impl InferenceClient {
    /// Create a new inference client
    pub fn new(api_endpoint: String, api_key: String) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_endpoint,
            api_key,
            http_client,
        }
    }

    /// Classify a soil image
    pub async fn predict_soil(&self, image_base64: String) -> AppResult<SoilClass> {
        let url = format!("{}/soil/classify", self.api_endpoint);
        let request = ClassifySoilRequest { image_base64 };

        let response: ClassifySoilResponse = self.post_json(&url, &request).await?;

        SoilClass::from_model_label(&response.label).ok_or_else(|| {
            AppError::InferenceError(format!("Unknown soil label: {}", response.label))
        })
    }

    /// Recommend a crop for the given features and soil class
    pub async fn predict_crop(&self, features: &CropFeatures, soil: SoilClass) -> AppResult<String> {
        let url = format!("{}/crop/recommend", self.api_endpoint);
        let request = RecommendCropRequest {
            nitrogen: features.nitrogen,
            phosphorus: features.phosphorus,
            potassium: features.potassium,
            temperature: features.temperature,
            humidity: features.humidity,
            ph: features.ph,
            rainfall: features.rainfall,
            soil_encoded: soil.encoded_index(),
        };

        let response: RecommendCropResponse = self.post_json(&url, &request).await?;
        Ok(response.label)
    }

    async fn post_json<Req, Resp>(&self, url: &str, request: &Req) -> AppResult<Resp>
    where
        Req: Serialize,
        Resp: serde::de::DeserializeOwned,
    {
        let response = self
            .http_client
            .post(url)
            .header("x-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::InferenceError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::InferenceError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::InferenceError(format!("Failed to parse response: {}", e)))
    }
}
