//! Rule-based quick assessment, no external service needed.
//!
//! Built property is judged by construction quality, plots by road access.
//! A fair verdict gives a tight (±10%) estimated range, overpriced a wide
//! (±25%) one. Deliberately coarse - the LLM branch exists for nuance.

use crate::common::format_price;
use crate::domains::properties::models::PropertyType;

use super::types::{
    Confidence, EstimatedRange, Impact, PriceAssessment, PriceCheckRequest, PriceFactor, Verdict,
};

const FAIR_QUALITIES: [&str; 2] = ["luxury", "high"];
const FAIR_ROAD_ACCESS: [&str; 3] = ["main-boulevard", "commercial-road", "corner-plot"];

/// Assess an asking price with local rules only.
pub fn quick_assessment(request: &PriceCheckRequest) -> PriceAssessment {
    let is_plot = request.property_type == PropertyType::Plot;

    let is_fair = if is_plot {
        request
            .road_access
            .as_deref()
            .is_some_and(|r| FAIR_ROAD_ACCESS.contains(&r))
    } else {
        request
            .construction_quality
            .as_deref()
            .is_some_and(|q| FAIR_QUALITIES.contains(&q))
    };

    let verdict = if is_fair {
        Verdict::Fair
    } else {
        Verdict::Overpriced
    };

    let variation = if is_fair { 0.10 } else { 0.25 };
    let price = request.asking_price as f64;
    let estimated_range = EstimatedRange {
        min: (price * (1.0 - variation)).round() as i64,
        max: (price * (1.0 + variation)).round() as i64,
    };

    let explanation = match (verdict, is_plot) {
        (Verdict::Fair, true) => {
            "This property appears to be fairly priced based on good road access and location."
        }
        (Verdict::Fair, false) => {
            "This property appears to be fairly priced based on quality construction standards."
        }
        (_, true) => {
            "This property may be overpriced. Consider negotiating based on road access and location factors."
        }
        (_, false) => {
            "This property may be overpriced. The construction quality suggests room for price negotiation."
        }
    }
    .to_string();

    let lead_factor = if is_plot {
        PriceFactor {
            factor: "Road Access".to_string(),
            impact: if is_fair { Impact::Positive } else { Impact::Negative },
            note: if is_fair {
                "Good road access adds value".to_string()
            } else {
                "Limited road access reduces value".to_string()
            },
        }
    } else {
        PriceFactor {
            factor: "Construction Quality".to_string(),
            impact: if is_fair { Impact::Positive } else { Impact::Negative },
            note: if is_fair {
                "High quality construction justifies the price".to_string()
            } else {
                "Standard construction may not justify this price".to_string()
            },
        }
    };

    PriceAssessment {
        verdict,
        estimated_range,
        confidence: Confidence::Medium,
        explanation,
        factors: vec![
            lead_factor,
            PriceFactor {
                factor: "Location".to_string(),
                impact: Impact::Neutral,
                note: format!("{}, {}", request.area, request.city),
            },
            PriceFactor {
                factor: "Property Size".to_string(),
                impact: Impact::Neutral,
                note: format!("{} {}", request.size_value, request.size_unit),
            },
            PriceFactor {
                factor: "Market Conditions".to_string(),
                impact: Impact::Neutral,
                note: format!(
                    "General market assessment around PKR {}",
                    format_price(request.asking_price)
                ),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(property_type: PropertyType) -> PriceCheckRequest {
        PriceCheckRequest {
            asking_price: 50_000_000,
            property_type,
            city: "Lahore".to_string(),
            area: "Gulberg".to_string(),
            size_value: 10.0,
            size_unit: "marla".to_string(),
            road_access: None,
            construction_quality: None,
            nearby_amenities: None,
            additional_details: None,
        }
    }

    #[test]
    fn test_luxury_house_is_fair() {
        let mut req = request(PropertyType::House);
        req.construction_quality = Some("luxury".to_string());
        let assessment = quick_assessment(&req);
        assert_eq!(assessment.verdict, Verdict::Fair);
        assert_eq!(assessment.estimated_range.min, 45_000_000);
        assert_eq!(assessment.estimated_range.max, 55_000_000);
    }

    #[test]
    fn test_basic_house_is_overpriced_with_wide_range() {
        let mut req = request(PropertyType::House);
        req.construction_quality = Some("basic".to_string());
        let assessment = quick_assessment(&req);
        assert_eq!(assessment.verdict, Verdict::Overpriced);
        assert_eq!(assessment.estimated_range.min, 37_500_000);
        assert_eq!(assessment.estimated_range.max, 62_500_000);
    }

    #[test]
    fn test_plot_judged_by_road_access_not_quality() {
        let mut req = request(PropertyType::Plot);
        req.construction_quality = Some("luxury".to_string()); // ignored for plots
        req.road_access = Some("unpaved".to_string());
        assert_eq!(quick_assessment(&req).verdict, Verdict::Overpriced);

        req.road_access = Some("main-boulevard".to_string());
        assert_eq!(quick_assessment(&req).verdict, Verdict::Fair);
    }

    #[test]
    fn test_missing_signals_default_to_overpriced() {
        let assessment = quick_assessment(&request(PropertyType::Apartment));
        assert_eq!(assessment.verdict, Verdict::Overpriced);
        assert_eq!(assessment.confidence, Confidence::Medium);
    }

    #[test]
    fn test_always_four_factors_with_location_note() {
        let assessment = quick_assessment(&request(PropertyType::House));
        assert_eq!(assessment.factors.len(), 4);
        assert!(assessment.factors[1].note.contains("Gulberg, Lahore"));
    }
}
