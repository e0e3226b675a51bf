//! WebAssembly module for AgroAssist
//!
//! Provides client-side computation for:
//! - Soil health scoring (works offline, identical to the server result)
//! - Ledger balance arithmetic
//! - Offline input validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Score a soil sample; returns the full report as JSON
#[wasm_bindgen]
pub fn score_soil_sample(
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
    ph: f64,
) -> Result<String, JsValue> {
    let report = score_soil_health(
        &SoilMeasurements {
            nitrogen,
            phosphorus,
            potassium,
            ph,
        },
        &SoilThresholds::default(),
    );

    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize report: {}", e)))
}

/// Rating label for a soil health score
#[wasm_bindgen]
pub fn soil_rating_for_score(score: u8) -> String {
    SoilRating::from_score(score).to_string()
}

/// Color hint for a soil health score
#[wasm_bindgen]
pub fn soil_color_for_score(score: u8) -> String {
    SoilRating::from_score(score).color().to_string()
}

/// Display label for a soil class model output (e.g. "Alluvial_Soil")
#[wasm_bindgen]
pub fn soil_class_display_name(model_label: &str) -> Result<String, JsValue> {
    SoilClass::from_model_label(model_label)
        .map(|class| class.display_name().to_string())
        .ok_or_else(|| JsValue::from_str(&format!("Unknown soil label: {}", model_label)))
}

/// Ledger balance from totals
#[wasm_bindgen]
pub fn ledger_balance(total_income: f64, total_expense: f64) -> f64 {
    total_income - total_expense
}

/// Validate a username before submitting the registration form
#[wasm_bindgen]
pub fn is_valid_username(username: &str) -> bool {
    validate_username(username).is_ok()
}

/// Validate a password before submitting the registration form
#[wasm_bindgen]
pub fn is_valid_password(password: &str) -> bool {
    validate_password(password).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_soil_sample_json() {
        let json = score_soil_sample(90.0, 45.0, 45.0, 6.8).unwrap();
        let report: SoilHealthReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.score, 100);
        assert_eq!(report.color, "green");
    }

    #[test]
    fn test_rating_helpers() {
        assert_eq!(soil_rating_for_score(85), "Excellent");
        assert_eq!(soil_rating_for_score(45), "Moderate");
        assert_eq!(soil_color_for_score(20), "red");
    }

    #[test]
    fn test_soil_class_display_name() {
        assert_eq!(
            soil_class_display_name("Black_Soil").unwrap(),
            "Black Soil"
        );
        assert!(soil_class_display_name("Clay_Soil").is_err());
    }

    #[test]
    fn test_ledger_balance() {
        assert!((ledger_balance(1500.0, 400.0) - 1100.0).abs() < 0.001);
    }

    #[test]
    fn test_validators() {
        assert!(is_valid_username("ravi_kumar"));
        assert!(!is_valid_username("ab"));
        assert!(is_valid_password("longenough"));
        assert!(!is_valid_password("short"));
    }
}
