//! HTTP handlers for weather forecasts

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::external::WeatherClient;
use crate::middleware::CurrentUser;
use crate::services::ForecastService;
use crate::AppState;
use shared::models::ForecastReport;
use shared::validation::validate_city_name;

/// Query parameters for forecast lookups
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub city: Option<String>,
}

/// Get the aggregated 5-day forecast for a city
///
/// Any provider failure (unknown city, transport error, malformed payload)
/// renders as the single weather-data-not-found outcome.
pub async fn get_forecast(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<ForecastReport>> {
    let city = query
        .city
        .unwrap_or_else(|| state.config.weather.default_city.clone());

    if let Err(message) = validate_city_name(&city) {
        return Err(AppError::Validation {
            field: "city".to_string(),
            message: message.to_string(),
        });
    }

    if state.config.weather.api_key.is_empty() {
        return Err(AppError::Configuration(
            "Weather API key not configured".to_string(),
        ));
    }

    let client = WeatherClient::new(
        state.config.weather.api_key.clone(),
        state.config.weather.api_endpoint.clone(),
    );
    let service = ForecastService::new(client);

    let report = service
        .city_forecast(&city)
        .await
        .ok_or(AppError::WeatherUnavailable)?;

    Ok(Json(report))
}
