//! HTTP handlers for soil classification and crop recommendation
//!
//! Both endpoints take a multipart form carrying the soil image; the crop
//! endpoint also carries the numeric features as text fields.

use std::collections::HashMap;

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::external::InferenceClient;
use crate::middleware::CurrentUser;
use crate::services::prediction::{CropPrediction, SoilPrediction};
use crate::services::PredictionService;
use crate::AppState;
use shared::models::CropFeatures;

const IMAGE_FIELD: &str = "soil_image";

/// Classify a soil image
pub async fn predict_soil(
    State(state): State<AppState>,
    current_user: CurrentUser,
    multipart: Multipart,
) -> AppResult<Json<SoilPrediction>> {
    let (image, _fields) = read_form(multipart).await?;

    let service = prediction_service(&state)?;
    let prediction = service
        .classify_soil(current_user.0.user_id, &image)
        .await?;

    Ok(Json(prediction))
}

/// Classify the soil image and recommend a crop for the field
pub async fn predict_crop(
    State(state): State<AppState>,
    current_user: CurrentUser,
    multipart: Multipart,
) -> AppResult<Json<CropPrediction>> {
    let (image, fields) = read_form(multipart).await?;

    let features = CropFeatures {
        nitrogen: numeric_field(&fields, "nitrogen")?,
        phosphorus: numeric_field(&fields, "phosphorus")?,
        potassium: numeric_field(&fields, "potassium")?,
        temperature: numeric_field(&fields, "temperature")?,
        humidity: numeric_field(&fields, "humidity")?,
        ph: numeric_field(&fields, "ph")?,
        rainfall: numeric_field(&fields, "rainfall")?,
    };

    let service = prediction_service(&state)?;
    let prediction = service
        .recommend_crop(current_user.0.user_id, &image, features)
        .await?;

    Ok(Json(prediction))
}

fn prediction_service(state: &AppState) -> AppResult<PredictionService> {
    if state.config.inference.api_endpoint.is_empty() {
        return Err(AppError::Configuration(
            "Inference service not configured".to_string(),
        ));
    }

    let client = InferenceClient::new(
        state.config.inference.api_endpoint.clone(),
        state.config.inference.api_key.clone(),
    );
    Ok(PredictionService::new(state.db.clone(), client))
}

/// Drain the multipart form into the image bytes and the text fields
async fn read_form(mut multipart: Multipart) -> AppResult<(Vec<u8>, HashMap<String, String>)> {
    let mut image: Option<Vec<u8>> = None;
    let mut fields = HashMap::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::Validation {
            field: "body".to_string(),
            message: format!("Invalid multipart form: {}", e),
        }
    })? {
        let name = field.name().unwrap_or_default().to_string();
        if name == IMAGE_FIELD {
            let bytes = field.bytes().await.map_err(|e| AppError::Validation {
                field: IMAGE_FIELD.to_string(),
                message: format!("Failed to read image: {}", e),
            })?;
            image = Some(bytes.to_vec());
        } else {
            let value = field.text().await.map_err(|e| AppError::Validation {
                field: name.clone(),
                message: format!("Failed to read field: {}", e),
            })?;
            fields.insert(name, value);
        }
    }

    let image = image.ok_or_else(|| AppError::Validation {
        field: IMAGE_FIELD.to_string(),
        message: "A soil image is required".to_string(),
    })?;

    if image.is_empty() {
        return Err(AppError::Validation {
            field: IMAGE_FIELD.to_string(),
            message: "The soil image is empty".to_string(),
        });
    }

    Ok((image, fields))
}

fn numeric_field(fields: &HashMap<String, String>, name: &str) -> AppResult<f64> {
    let value = fields.get(name).ok_or_else(|| AppError::Validation {
        field: name.to_string(),
        message: format!("Missing field: {}", name),
    })?;

    value.trim().parse().map_err(|_| AppError::Validation {
        field: name.to_string(),
        message: format!("{} must be a number", name),
    })
}
