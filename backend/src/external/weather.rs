//! Weather API client for fetching forecast data
//!
//! Integrates with the OpenWeatherMap 5-day/3-hour forecast API by city name

use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use shared::models::{ForecastSample, ProviderLocation};

/// Number of 3-hour periods requested per forecast (5 days x 8 periods)
const FORECAST_PERIODS: u32 = 40;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap forecast response envelope
///
/// `cod` is a string status; error payloads carry only `cod` and `message`,
/// so the data fields stay optional.
#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    cod: String,
    message: Option<serde_json::Value>,
    city: Option<OwmCity>,
    list: Option<Vec<OwmForecastItem>>,
}

#[derive(Debug, Deserialize)]
struct OwmCity {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt_txt: String,
    main: OwmMain,
    weather: Vec<OwmWeather>,
    wind: OwmWind,
    rain: Option<OwmRain>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp_min: f64,
    temp_max: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch the 5-day forecast for a city
    ///
    /// Every failure mode (transport error, non-success HTTP status, a
    /// non-"200" `cod` envelope, unparseable payload) maps to
    /// [`AppError::WeatherUnavailable`].
    pub async fn get_city_forecast(
        &self,
        city: &str,
    ) -> AppResult<(ProviderLocation, Vec<ForecastSample>)> {
        let url = format!("{}/forecast", self.base_url);
        let periods = FORECAST_PERIODS.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("cnt", periods.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Weather API request failed: {}", e);
                AppError::WeatherUnavailable
            })?;

        let data: OwmForecastResponse = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse weather response: {}", e);
            AppError::WeatherUnavailable
        })?;

        if data.cod != "200" {
            tracing::warn!(
                "Weather API returned status {}: {:?}",
                data.cod,
                data.message
            );
            return Err(AppError::WeatherUnavailable);
        }

        let (city, list) = match (data.city, data.list) {
            (Some(city), Some(list)) => (city, list),
            _ => {
                tracing::warn!("Weather API response is missing city or list");
                return Err(AppError::WeatherUnavailable);
            }
        };

        let location = ProviderLocation {
            city: city.name,
            country: city.country,
        };

        let samples = list
            .into_iter()
            .filter_map(convert_forecast_item)
            .collect();

        Ok((location, samples))
    }
}

/// Convert one provider sample to our format
///
/// Samples with an unparseable `dt_txt` are dropped rather than failing the
/// whole forecast.
fn convert_forecast_item(item: OwmForecastItem) -> Option<ForecastSample> {
    let timestamp = NaiveDateTime::parse_from_str(&item.dt_txt, "%Y-%m-%d %H:%M:%S")
        .map_err(|e| {
            tracing::warn!("Skipping sample with bad timestamp {:?}: {}", item.dt_txt, e);
            e
        })
        .ok()?;
    let weather = item.weather.first();

    Some(ForecastSample {
        timestamp,
        temp_min: item.main.temp_min,
        temp_max: item.main.temp_max,
        humidity: item.main.humidity,
        rain_3h: item.rain.and_then(|r| r.three_hour),
        wind_speed: item.wind.speed,
        description: weather.map(|w| w.description.clone()).unwrap_or_default(),
        icon: weather.map(|w| w.icon.clone()).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_parses_without_data_fields() {
        let payload = r#"{"cod": "404", "message": "city not found"}"#;
        let data: OwmForecastResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(data.cod, "404");
        assert!(data.city.is_none());
        assert!(data.list.is_none());
    }

    #[test]
    fn test_sample_conversion() {
        let payload = r#"{
            "dt_txt": "2026-08-06 09:00:00",
            "main": {"temp_min": 24.1, "temp_max": 29.8, "humidity": 71},
            "weather": [{"description": "light rain", "icon": "10d"}],
            "wind": {"speed": 12.4},
            "rain": {"3h": 1.6}
        }"#;
        let item: OwmForecastItem = serde_json::from_str(payload).unwrap();
        let sample = convert_forecast_item(item).unwrap();
        assert_eq!(sample.humidity, 71);
        assert_eq!(sample.rain_3h, Some(1.6));
        assert_eq!(sample.description, "light rain");
        assert_eq!(sample.timestamp.to_string(), "2026-08-06 09:00:00");
    }

    #[test]
    fn test_sample_without_rain_block() {
        let payload = r#"{
            "dt_txt": "2026-08-06 12:00:00",
            "main": {"temp_min": 24.1, "temp_max": 29.8, "humidity": 71},
            "weather": [],
            "wind": {"speed": 3.0}
        }"#;
        let item: OwmForecastItem = serde_json::from_str(payload).unwrap();
        let sample = convert_forecast_item(item).unwrap();
        assert_eq!(sample.rain_3h, None);
        assert_eq!(sample.description, "");
    }

    #[test]
    fn test_bad_timestamp_drops_sample() {
        let payload = r#"{
            "dt_txt": "not-a-timestamp",
            "main": {"temp_min": 24.1, "temp_max": 29.8, "humidity": 71},
            "weather": [],
            "wind": {"speed": 3.0}
        }"#;
        let item: OwmForecastItem = serde_json::from_str(payload).unwrap();
        assert!(convert_forecast_item(item).is_none());
    }
}
