//! HTTP handler for the government schemes catalogue

use axum::Json;

use shared::models::{government_schemes, GovernmentScheme};

/// List government support schemes (public)
pub async fn list_schemes() -> Json<Vec<GovernmentScheme>> {
    Json(government_schemes())
}
