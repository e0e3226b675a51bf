//! Forecast service: fetch, aggregate, warn

use crate::external::WeatherClient;
use shared::models::{aggregate_forecast, ForecastReport, WarningThresholds};

/// Weather forecast service
///
/// Wraps the provider client and reshapes its 3-hour samples into the
/// per-day report the UI renders.
#[derive(Clone)]
pub struct ForecastService {
    client: WeatherClient,
    thresholds: WarningThresholds,
}

impl ForecastService {
    /// Create a new ForecastService
    pub fn new(client: WeatherClient) -> Self {
        Self {
            client,
            thresholds: WarningThresholds::default(),
        }
    }

    /// Create a ForecastService with custom warning thresholds
    pub fn with_thresholds(client: WeatherClient, thresholds: WarningThresholds) -> Self {
        Self { client, thresholds }
    }

    /// Fetch and aggregate the 5-day forecast for a city
    ///
    /// Returns `None` for every provider failure; an unknown city and a
    /// transport error are indistinguishable to callers. Diagnostics go to
    /// tracing only.
    pub async fn city_forecast(&self, city: &str) -> Option<ForecastReport> {
        match self.client.get_city_forecast(city).await {
            Ok((location, samples)) => {
                Some(aggregate_forecast(&samples, location, &self.thresholds))
            }
            Err(e) => {
                tracing::warn!("Forecast unavailable for {:?}: {}", city, e);
                None
            }
        }
    }
}
