//! Government support scheme catalogue

use serde::{Deserialize, Serialize};

/// A government support scheme farmers can apply to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GovernmentScheme {
    pub name: String,
    pub description: String,
    pub eligibility: String,
    pub benefits: String,
    pub link: String,
}

/// The static catalogue served by the schemes endpoint
pub fn government_schemes() -> Vec<GovernmentScheme> {
    let raw: [(&str, &str, &str, &str, &str); 5] = [
        (
            "Pradhan Mantri Krishi Sinchai Yojana",
            "Provides irrigation facilities to every farm",
            "All farmers",
            "Up to 50% subsidy on irrigation systems",
            "https://pmksy.gov.in",
        ),
        (
            "Soil Health Card Scheme",
            "Provides soil health cards to farmers",
            "All landholding farmers",
            "Free soil testing and recommendations",
            "https://soilhealth.dac.gov.in",
        ),
        (
            "National Mission for Sustainable Agriculture",
            "Promotes sustainable agriculture practices",
            "Farmers practicing sustainable methods",
            "Financial assistance and training",
            "https://nmsa.dac.gov.in",
        ),
        (
            "Paramparagat Krishi Vikas Yojana",
            "Promotes organic farming",
            "Farmers practicing organic farming",
            "₹50,000 per hectare for 3 years",
            "https://pgsindia-ncof.gov.in",
        ),
        (
            "PM Kisan Samman Nidhi",
            "Direct income support to farmers",
            "All small and marginal farmers",
            "₹6,000 per year in three installments",
            "https://pmkisan.gov.in",
        ),
    ];

    raw.into_iter()
        .map(
            |(name, description, eligibility, benefits, link)| GovernmentScheme {
                name: name.to_string(),
                description: description.to_string(),
                eligibility: eligibility.to_string(),
                benefits: benefits.to_string(),
                link: link.to_string(),
            },
        )
        .collect()
}
