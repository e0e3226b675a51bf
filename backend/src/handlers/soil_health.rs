//! HTTP handler for the soil health meter

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use shared::models::{score_soil_health, SoilHealthReport, SoilMeasurements, SoilThresholds};

#[derive(Debug, Deserialize)]
pub struct SoilHealthRequest {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
}

#[derive(Debug, Serialize)]
pub struct SoilHealthResponse {
    pub measurements: SoilMeasurements,
    pub report: SoilHealthReport,
}

/// Score a soil sample
///
/// The scorer is total over all numeric inputs, so the request body is never
/// range-checked.
pub async fn analyze_soil_health(
    _current_user: CurrentUser,
    Json(body): Json<SoilHealthRequest>,
) -> AppResult<Json<SoilHealthResponse>> {
    let measurements = SoilMeasurements {
        nitrogen: body.nitrogen,
        phosphorus: body.phosphorus,
        potassium: body.potassium,
        ph: body.ph,
    };

    let report = score_soil_health(&measurements, &SoilThresholds::default());

    Ok(Json(SoilHealthResponse {
        measurements,
        report,
    }))
}
