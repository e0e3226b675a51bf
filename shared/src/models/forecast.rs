//! Weather forecast models and the per-day aggregation engine

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// City and country reported by the forecast provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderLocation {
    pub city: String,
    pub country: String,
}

/// One 3-hour forecast sample from the provider
///
/// Timestamps are local to the forecast city and carry no offset, so they
/// stay naive; grouping uses the date component only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: NaiveDateTime,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: i32,
    pub rain_3h: Option<f64>,
    pub wind_speed: f64,
    pub description: String,
    pub icon: String,
}

/// Aggregated forecast for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub day_name: String,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: i32,
    /// Accumulated 3-hour rainfall over the day, in mm
    pub rain: f64,
    pub wind_speed: f64,
    pub description: String,
    pub icon: String,
}

/// Aggregated multi-day forecast with agronomic warnings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReport {
    pub city: String,
    pub country: String,
    pub days: Vec<DailySummary>,
    pub warnings: Vec<String>,
}

/// Thresholds that trigger per-day agronomic warnings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningThresholds {
    /// Accumulated daily rainfall above this is a heavy-rainfall warning (mm)
    pub heavy_rain_mm: f64,
    /// Daily maximum temperature above this is a heatwave warning (°C)
    pub heatwave_celsius: f64,
    /// Day wind speed above this is a strong-wind warning (km/h)
    pub strong_wind_kmh: f64,
}

impl Default for WarningThresholds {
    fn default() -> Self {
        Self {
            heavy_rain_mm: 20.0,
            heatwave_celsius: 40.0,
            strong_wind_kmh: 30.0,
        }
    }
}

/// Maximum number of days in an aggregated report
pub const MAX_FORECAST_DAYS: usize = 5;

struct DayAccumulator {
    date: NaiveDate,
    temp_min: f64,
    temp_max: f64,
    humidity: i32,
    rain: f64,
    wind_speed: f64,
    description: String,
    icon: String,
}

/// Aggregate 3-hour samples into at most [`MAX_FORECAST_DAYS`] daily
/// summaries plus warnings
///
/// Samples group by the calendar date of their timestamp, in encounter
/// order. Within a day, temp_min/temp_max take the min/max and rainfall
/// accumulates; humidity, wind speed, description and icon stay bound to the
/// day's first sample. Temps and wind round to 1 decimal, rain to 2.
pub fn aggregate_forecast(
    samples: &[ForecastSample],
    location: ProviderLocation,
    thresholds: &WarningThresholds,
) -> ForecastReport {
    let mut days: Vec<DayAccumulator> = Vec::new();

    for sample in samples {
        let date = sample.timestamp.date();
        match days.iter_mut().find(|day| day.date == date) {
            Some(day) => {
                day.temp_min = day.temp_min.min(sample.temp_min);
                day.temp_max = day.temp_max.max(sample.temp_max);
                day.rain += sample.rain_3h.unwrap_or(0.0);
            }
            None => days.push(DayAccumulator {
                date,
                temp_min: sample.temp_min,
                temp_max: sample.temp_max,
                humidity: sample.humidity,
                rain: sample.rain_3h.unwrap_or(0.0),
                wind_speed: sample.wind_speed,
                description: sample.description.clone(),
                icon: sample.icon.clone(),
            }),
        }
    }

    let mut summaries = Vec::with_capacity(MAX_FORECAST_DAYS);
    let mut warnings = Vec::new();

    for day in days.into_iter().take(MAX_FORECAST_DAYS) {
        let summary = DailySummary {
            date: day.date,
            day_name: day.date.format("%A").to_string(),
            temp_min: round_1dp(day.temp_min),
            temp_max: round_1dp(day.temp_max),
            humidity: day.humidity,
            rain: round_2dp(day.rain),
            wind_speed: round_1dp(day.wind_speed),
            description: day.description,
            icon: day.icon,
        };

        let date_label = summary.date.format("%b %d");
        if summary.rain > thresholds.heavy_rain_mm {
            warnings.push(format!(
                "Heavy rainfall ({}mm) expected on {}. Consider delaying irrigation and protecting crops.",
                summary.rain, date_label
            ));
        }
        if summary.temp_max > thresholds.heatwave_celsius {
            warnings.push(format!(
                "Heatwave warning! Temperature up to {}°C on {}. Increase irrigation and provide shade.",
                summary.temp_max, date_label
            ));
        }
        if summary.wind_speed > thresholds.strong_wind_kmh {
            warnings.push(format!(
                "Strong winds ({} km/h) on {}. Secure crops and equipment.",
                summary.wind_speed, date_label
            ));
        }

        summaries.push(summary);
    }

    ForecastReport {
        city: location.city,
        country: location.country,
        days: summaries,
        warnings,
    }
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
