//! Soil health scorer integration tests
//!
//! Covers the scoring contract: score range, rating/color mapping,
//! suggestion ordering, and the intentional permissiveness on
//! out-of-range inputs.

use proptest::prelude::*;

use shared::models::{
    score_soil_health, SoilMeasurements, SoilRating, SoilThresholds,
};

fn score(n: f64, p: f64, k: f64, ph: f64) -> shared::models::SoilHealthReport {
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

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// All four sub-scores at their top band
    #[test]
    fn test_perfect_sample() {
        let report = score(90.0, 45.0, 45.0, 6.8);
        assert_eq!(report.score, 100);
        assert_eq!(report.rating, SoilRating::Excellent);
        assert_eq!(report.color, "green");
        assert!(report.suggestions.is_empty());
    }

    /// N=80 sits below the strict rich bound, so it lands in the mid band
    /// while the rest are at full score: 15 + 25 + 25 + 25 = 90.
    #[test]
    fn test_nitrogen_edge_scenario() {
        let report = score(80.0, 41.0, 41.0, 7.0);
        assert_eq!(report.score, 90);
        assert_eq!(report.rating, SoilRating::Excellent);
        assert_eq!(
            report.suggestions,
            vec!["Add nitrogen-rich fertilizer (Urea/Ammonium)".to_string()]
        );
    }

    /// Depleted sample: every band at minimum, 4 suggestions
    #[test]
    fn test_depleted_sample() {
        let report = score(30.0, 10.0, 10.0, 9.0);
        assert_eq!(report.score, 20);
        assert_eq!(report.rating, SoilRating::Poor);
        assert_eq!(report.color, "red");
        assert_eq!(report.suggestions.len(), 4);
        assert!(report
            .suggestions
            .contains(&"Soil pH is critical. Consult expert immediately".to_string()));
    }

    /// Suggestions accumulate in fixed N, P, K, pH order
    #[test]
    fn test_suggestion_order() {
        let report = score(60.0, 30.0, 30.0, 5.7);
        assert_eq!(
            report.suggestions,
            vec![
                "Add nitrogen-rich fertilizer (Urea/Ammonium)".to_string(),
                "Add phosphorus fertilizer (DAP/Superphosphate)".to_string(),
                "Add potassium fertilizer (MOP/SOP)".to_string(),
                "Add lime to increase pH".to_string(),
            ]
        );
        assert_eq!(report.score, 60);
        assert_eq!(report.rating, SoilRating::Good);
        assert_eq!(report.color, "blue");
    }

    /// Physically nonsensical inputs are scored, not rejected
    #[test]
    fn test_out_of_range_inputs_accepted() {
        let report = score(-40.0, 1000.0, -3.0, 17.2);
        assert_eq!(report.score, 5 + 25 + 5 + 5);
        assert_eq!(report.rating, SoilRating::Poor);
        assert_eq!(report.suggestions.len(), 3);
    }

    /// Rating thresholds are inclusive lower bounds
    #[test]
    fn test_rating_boundaries() {
        assert_eq!(SoilRating::from_score(80), SoilRating::Excellent);
        assert_eq!(SoilRating::from_score(79), SoilRating::Good);
        assert_eq!(SoilRating::from_score(60), SoilRating::Good);
        assert_eq!(SoilRating::from_score(59), SoilRating::Moderate);
        assert_eq!(SoilRating::from_score(40), SoilRating::Moderate);
        assert_eq!(SoilRating::from_score(39), SoilRating::Poor);
    }

    /// Color hints map 1:1 to ratings
    #[test]
    fn test_color_mapping() {
        assert_eq!(SoilRating::Excellent.color(), "green");
        assert_eq!(SoilRating::Good.color(), "blue");
        assert_eq!(SoilRating::Moderate.color(), "orange");
        assert_eq!(SoilRating::Poor.color(), "red");
    }

    /// Band edges for each nutrient: the rich bound is strict
    #[test]
    fn test_nutrient_band_edges() {
        assert_eq!(score(80.0, 45.0, 45.0, 7.0).score, 90);
        assert_eq!(score(80.1, 45.0, 45.0, 7.0).score, 100);
        assert_eq!(score(50.0, 45.0, 45.0, 7.0).score, 80);
        assert_eq!(score(90.0, 40.0, 45.0, 7.0).score, 90);
        assert_eq!(score(90.0, 20.0, 45.0, 7.0).score, 80);
        assert_eq!(score(90.0, 45.0, 40.0, 7.0).score, 90);
        assert_eq!(score(90.0, 45.0, 20.0, 7.0).score, 80);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn nutrient_strategy() -> impl Strategy<Value = f64> {
        0.0..=200.0f64
    }

    fn ph_strategy() -> impl Strategy<Value = f64> {
        0.0..=14.0f64
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// Score always lands in [20, 100] for the physical input domain
        #[test]
        fn prop_score_in_range(
            n in nutrient_strategy(),
            p in nutrient_strategy(),
            k in nutrient_strategy(),
            ph in ph_strategy()
        ) {
            let report = score(n, p, k, ph);
            prop_assert!(report.score >= 20);
            prop_assert!(report.score <= 100);
        }

        /// The score is a sum of four sub-scores each in {5, 15, 25}
        #[test]
        fn prop_score_is_sum_of_bands(
            n in nutrient_strategy(),
            p in nutrient_strategy(),
            k in nutrient_strategy(),
            ph in ph_strategy()
        ) {
            let report = score(n, p, k, ph);
            // Only multiples of 10 offset from 20 are reachable
            prop_assert_eq!(report.score % 10, 0);
        }

        /// Scoring is deterministic: same inputs, same report
        #[test]
        fn prop_deterministic(
            n in nutrient_strategy(),
            p in nutrient_strategy(),
            k in nutrient_strategy(),
            ph in ph_strategy()
        ) {
            let a = score(n, p, k, ph);
            let b = score(n, p, k, ph);
            prop_assert_eq!(a.score, b.score);
            prop_assert_eq!(a.rating, b.rating);
            prop_assert_eq!(a.suggestions, b.suggestions);
        }

        /// Rating and color are a function of the score alone
        #[test]
        fn prop_rating_follows_score(
            n in nutrient_strategy(),
            p in nutrient_strategy(),
            k in nutrient_strategy(),
            ph in ph_strategy()
        ) {
            let report = score(n, p, k, ph);
            prop_assert_eq!(report.rating, SoilRating::from_score(report.score));
            prop_assert_eq!(report.color.as_str(), report.rating.color());
        }

        /// Every sub-score below its top band contributes a suggestion
        #[test]
        fn prop_suggestion_count_matches_shortfalls(
            n in nutrient_strategy(),
            p in nutrient_strategy(),
            k in nutrient_strategy(),
            ph in ph_strategy()
        ) {
            let report = score(n, p, k, ph);
            let shortfalls = (100 - report.score as usize) / 10;
            // Each non-top band loses 10 or 20 points and adds one suggestion
            prop_assert!(report.suggestions.len() <= shortfalls);
            prop_assert!(report.suggestions.len() >= shortfalls.div_ceil(2));
            prop_assert!(report.suggestions.len() <= 4);
        }
    }
}
