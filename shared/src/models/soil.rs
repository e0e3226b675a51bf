//! Soil classification and soil health models

use serde::{Deserialize, Serialize};

/// The seven soil classes the classification model can emit
///
/// Variant order matches the alphabetical label encoding the crop model was
/// trained with; `encoded_index` depends on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SoilClass {
    Alluvial,
    Arid,
    Black,
    Laterite,
    Mountain,
    Red,
    Yellow,
}

impl SoilClass {
    pub const ALL: [SoilClass; 7] = [
        SoilClass::Alluvial,
        SoilClass::Arid,
        SoilClass::Black,
        SoilClass::Laterite,
        SoilClass::Mountain,
        SoilClass::Red,
        SoilClass::Yellow,
    ];

    /// Parse the underscore label the classification model emits
    pub fn from_model_label(label: &str) -> Option<Self> {
        match label {
            "Alluvial_Soil" => Some(SoilClass::Alluvial),
            "Arid_Soil" => Some(SoilClass::Arid),
            "Black_Soil" => Some(SoilClass::Black),
            "Laterite_Soil" => Some(SoilClass::Laterite),
            "Mountain_Soil" => Some(SoilClass::Mountain),
            "Red_Soil" => Some(SoilClass::Red),
            "Yellow_Soil" => Some(SoilClass::Yellow),
            _ => None,
        }
    }

    /// Display label shown to users and stored in prediction history
    pub fn display_name(&self) -> &'static str {
        match self {
            SoilClass::Alluvial => "Alluvial Soil",
            SoilClass::Arid => "Arid Soil",
            SoilClass::Black => "Black Soil",
            SoilClass::Laterite => "Laterite Soil",
            SoilClass::Mountain => "Mountain Soil",
            SoilClass::Red => "Red Soil",
            SoilClass::Yellow => "Yellow Soil",
        }
    }

    /// Label-encoder index the crop model expects for this class
    pub fn encoded_index(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for SoilClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// NPK and pH measurements for a field sample
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SoilMeasurements {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
}

/// Nutrient and pH bands used by the soil health scorer
///
/// `*_rich` is the exclusive lower bound of the full-score band; `*_low` is
/// the exclusive lower bound of the mid band. pH uses an inclusive ideal
/// window and a tolerable window around it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilThresholds {
    pub nitrogen_rich: f64,
    pub nitrogen_low: f64,
    pub phosphorus_rich: f64,
    pub phosphorus_low: f64,
    pub potassium_rich: f64,
    pub potassium_low: f64,
    pub ph_ideal_min: f64,
    pub ph_ideal_max: f64,
    pub ph_tolerable_min: f64,
    pub ph_tolerable_max: f64,
}

impl Default for SoilThresholds {
    fn default() -> Self {
        Self {
            nitrogen_rich: 80.0,
            nitrogen_low: 50.0,
            phosphorus_rich: 40.0,
            phosphorus_low: 20.0,
            potassium_rich: 40.0,
            potassium_low: 20.0,
            ph_ideal_min: 6.0,
            ph_ideal_max: 7.5,
            ph_tolerable_min: 5.5,
            ph_tolerable_max: 8.0,
        }
    }
}

/// Overall soil health rating derived from the score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilRating {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl SoilRating {
    /// Map a total score to a rating (inclusive lower bounds, first match wins)
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            SoilRating::Excellent
        } else if score >= 60 {
            SoilRating::Good
        } else if score >= 40 {
            SoilRating::Moderate
        } else {
            SoilRating::Poor
        }
    }

    /// UI color hint, 1:1 with the rating
    pub fn color(&self) -> &'static str {
        match self {
            SoilRating::Excellent => "green",
            SoilRating::Good => "blue",
            SoilRating::Moderate => "orange",
            SoilRating::Poor => "red",
        }
    }
}

impl std::fmt::Display for SoilRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilRating::Excellent => write!(f, "Excellent"),
            SoilRating::Good => write!(f, "Good"),
            SoilRating::Moderate => write!(f, "Moderate"),
            SoilRating::Poor => write!(f, "Poor"),
        }
    }
}

/// Result of scoring a soil sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilHealthReport {
    /// Total score in [20, 100]: sum of four sub-scores, each 5, 15 or 25
    pub score: u8,
    pub rating: SoilRating,
    pub color: String,
    /// Remediation advice accumulated in N, P, K, pH order
    pub suggestions: Vec<String>,
}

/// Score a soil sample against the given thresholds
///
/// Total over all real inputs: out-of-range values (negative N, pH above 14)
/// are scored by the same bands rather than rejected.
pub fn score_soil_health(sample: &SoilMeasurements, thresholds: &SoilThresholds) -> SoilHealthReport {
    let mut score: u8 = 0;
    let mut suggestions = Vec::new();

    if sample.nitrogen > thresholds.nitrogen_rich {
        score += 25;
    } else if sample.nitrogen > thresholds.nitrogen_low {
        score += 15;
        suggestions.push("Add nitrogen-rich fertilizer (Urea/Ammonium)".to_string());
    } else {
        score += 5;
        suggestions.push("Urgent: Add nitrogen fertilizer immediately".to_string());
    }

    if sample.phosphorus > thresholds.phosphorus_rich {
        score += 25;
    } else if sample.phosphorus > thresholds.phosphorus_low {
        score += 15;
        suggestions.push("Add phosphorus fertilizer (DAP/Superphosphate)".to_string());
    } else {
        score += 5;
        suggestions.push("Urgent: Add phosphorus fertilizer".to_string());
    }

    if sample.potassium > thresholds.potassium_rich {
        score += 25;
    } else if sample.potassium > thresholds.potassium_low {
        score += 15;
        suggestions.push("Add potassium fertilizer (MOP/SOP)".to_string());
    } else {
        score += 5;
        suggestions.push("Urgent: Add potassium fertilizer".to_string());
    }

    if sample.ph >= thresholds.ph_ideal_min && sample.ph <= thresholds.ph_ideal_max {
        score += 25;
    } else if (sample.ph >= thresholds.ph_tolerable_min && sample.ph < thresholds.ph_ideal_min)
        || (sample.ph > thresholds.ph_ideal_max && sample.ph <= thresholds.ph_tolerable_max)
    {
        score += 15;
        if sample.ph < thresholds.ph_ideal_min {
            suggestions.push("Add lime to increase pH".to_string());
        } else {
            suggestions.push("Add sulfur to decrease pH".to_string());
        }
    } else {
        score += 5;
        suggestions.push("Soil pH is critical. Consult expert immediately".to_string());
    }

    let rating = SoilRating::from_score(score);
    SoilHealthReport {
        score,
        rating,
        color: rating.color().to_string(),
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(n: f64, p: f64, k: f64, ph: f64) -> SoilHealthReport {
        score_soil_health(
            &SoilMeasurements {
                nitrogen: n,
                phosphorus: p,
                potassium: k,
                ph,
            },
            &SoilThresholds::default(),
        )
    }

    #[test]
    fn test_all_rich_sample_scores_100() {
        let report = score(100.0, 50.0, 50.0, 7.0);
        assert_eq!(report.score, 100);
        assert_eq!(report.rating, SoilRating::Excellent);
        assert_eq!(report.color, "green");
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_nitrogen_boundary_falls_to_mid_band() {
        // N = 80 is not "rich" (strict bound); everything else at full score
        let report = score(80.0, 50.0, 50.0, 7.0);
        assert_eq!(report.score, 90);
        assert_eq!(report.rating, SoilRating::Excellent);
        assert_eq!(
            report.suggestions,
            vec!["Add nitrogen-rich fertilizer (Urea/Ammonium)".to_string()]
        );
    }

    #[test]
    fn test_depleted_sample_scores_20() {
        let report = score(30.0, 10.0, 10.0, 9.0);
        assert_eq!(report.score, 20);
        assert_eq!(report.rating, SoilRating::Poor);
        assert_eq!(report.color, "red");
        assert_eq!(report.suggestions.len(), 4);
        assert_eq!(
            report.suggestions[3],
            "Soil pH is critical. Consult expert immediately"
        );
    }

    #[test]
    fn test_out_of_range_inputs_are_scored_not_rejected() {
        let report = score(-5.0, 500.0, 40.0, 15.0);
        assert_eq!(report.score, 5 + 25 + 15 + 5);
        assert_eq!(report.rating, SoilRating::Moderate);
    }

    #[test]
    fn test_ph_band_edges() {
        assert_eq!(score(100.0, 50.0, 50.0, 6.0).score, 100);
        assert_eq!(score(100.0, 50.0, 50.0, 7.5).score, 100);
        assert_eq!(score(100.0, 50.0, 50.0, 5.5).score, 90);
        assert_eq!(score(100.0, 50.0, 50.0, 8.0).score, 90);
        assert_eq!(score(100.0, 50.0, 50.0, 5.4).score, 80);
        assert_eq!(score(100.0, 50.0, 50.0, 8.1).score, 80);
    }

    #[test]
    fn test_ph_suggestion_direction() {
        let acidic = score(100.0, 50.0, 50.0, 5.7);
        assert_eq!(acidic.suggestions, vec!["Add lime to increase pH".to_string()]);
        let alkaline = score(100.0, 50.0, 50.0, 7.8);
        assert_eq!(alkaline.suggestions, vec!["Add sulfur to decrease pH".to_string()]);
    }

    #[test]
    fn test_rating_score_boundaries() {
        assert_eq!(SoilRating::from_score(80), SoilRating::Excellent);
        assert_eq!(SoilRating::from_score(79), SoilRating::Good);
        assert_eq!(SoilRating::from_score(60), SoilRating::Good);
        assert_eq!(SoilRating::from_score(59), SoilRating::Moderate);
        assert_eq!(SoilRating::from_score(40), SoilRating::Moderate);
        assert_eq!(SoilRating::from_score(39), SoilRating::Poor);
        assert_eq!(SoilRating::from_score(20), SoilRating::Poor);
    }

    #[test]
    fn test_model_label_round_trip() {
        assert_eq!(
            SoilClass::from_model_label("Laterite_Soil"),
            Some(SoilClass::Laterite)
        );
        assert_eq!(SoilClass::from_model_label("Sandy_Soil"), None);
        assert_eq!(SoilClass::Laterite.display_name(), "Laterite Soil");
    }

    #[test]
    fn test_encoded_indexes_are_alphabetical() {
        let mut labels: Vec<&str> = SoilClass::ALL.iter().map(|c| c.display_name()).collect();
        let sorted = {
            let mut s = labels.clone();
            s.sort();
            s
        };
        assert_eq!(labels, sorted);
        labels.sort();
        for (i, class) in SoilClass::ALL.iter().enumerate() {
            assert_eq!(class.encoded_index() as usize, i);
        }
    }
}
