//! Route definitions for AgroAssist

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public)
        .nest("/auth", auth_routes())
        // Government schemes (public)
        .route("/schemes", get(handlers::list_schemes))
        // Protected routes - soil health meter
        .nest("/soil-health", soil_health_routes())
        // Protected routes - weather forecasts
        .nest("/weather", weather_routes())
        // Protected routes - classification
        .nest("/predictions", prediction_routes())
        // Protected routes - prediction history
        .nest("/history", history_routes())
        // Protected routes - farm ledger
        .nest("/ledger", ledger_routes())
        // Protected routes - dashboard
        .nest("/dashboard", dashboard_routes())
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
}

/// Soil health routes (protected)
fn soil_health_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::analyze_soil_health))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Weather routes (protected)
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/forecast", get(handlers::get_forecast))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Classification routes (protected)
fn prediction_routes() -> Router<AppState> {
    Router::new()
        .route("/soil", post(handlers::predict_soil))
        .route("/crop", post(handlers::predict_crop))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Prediction history routes (protected)
fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_history))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Farm ledger routes (protected)
fn ledger_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_ledger_entries).post(handlers::create_ledger_entry),
        )
        .route("/:entry_id", delete(handlers::delete_ledger_entry))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Dashboard routes (protected)
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_dashboard))
        .route_layer(middleware::from_fn(auth_middleware))
}
