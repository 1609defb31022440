//! Price assessment types shared by the heuristic and LLM branches.
//!
//! Serde names follow the JSON contract the analyst prompt demands of the
//! model (camelCase keys, lowercase enum values), so the LLM response
//! deserializes straight into these.

use serde::{Deserialize, Serialize};

use crate::domains::properties::models::PropertyType;

/// A price check request
#[derive(Debug, Clone)]
pub struct PriceCheckRequest {
    /// Asking price in PKR; must be positive (validated at the edge).
    pub asking_price: i64,
    pub property_type: PropertyType,
    pub city: String,
    pub area: String,
    pub size_value: f64,
    pub size_unit: String,
    pub road_access: Option<String>,
    pub construction_quality: Option<String>,
    pub nearby_amenities: Option<String>,
    pub additional_details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Underpriced,
    Fair,
    Overpriced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceFactor {
    pub factor: String,
    pub impact: Impact,
    pub note: String,
}

/// The full assessment returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAssessment {
    pub verdict: Verdict,
    pub estimated_range: EstimatedRange,
    pub confidence: Confidence,
    pub explanation: String,
    pub factors: Vec<PriceFactor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_deserializes_llm_contract() {
        let json = r#"{
            "verdict": "overpriced",
            "estimatedRange": {"min": 40000000, "max": 55000000},
            "confidence": "high",
            "explanation": "Above comparable sales in the area.",
            "factors": [
                {"factor": "Location premium", "impact": "positive", "note": "Prime block"},
                {"factor": "Market trend", "impact": "negative", "note": "Cooling market"}
            ]
        }"#;
        let assessment: PriceAssessment = serde_json::from_str(json).unwrap();
        assert_eq!(assessment.verdict, Verdict::Overpriced);
        assert_eq!(assessment.estimated_range.min, 40_000_000);
        assert_eq!(assessment.confidence, Confidence::High);
        assert_eq!(assessment.factors.len(), 2);
        assert_eq!(assessment.factors[0].impact, Impact::Positive);
    }

    #[test]
    fn test_verdict_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Verdict::Fair).unwrap(), "\"fair\"");
        assert_eq!(
            serde_json::to_string(&Verdict::Underpriced).unwrap(),
            "\"underpriced\""
        );
    }
}
