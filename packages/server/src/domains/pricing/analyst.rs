//! LLM-backed price analysis.
//!
//! Builds a structured prompt from the request, asks the model for a JSON
//! verdict, strips any markdown code fences it wraps the payload in, and
//! deserializes into `PriceAssessment`.

use thiserror::Error;
use tracing::{info, warn};

use crate::common::format_price;
use crate::kernel::BaseAI;

use super::types::{PriceAssessment, PriceCheckRequest};

#[derive(Debug, Error)]
pub enum PriceCheckError {
    #[error("AI analysis is not configured")]
    NotConfigured,
    #[error("AI completion failed: {0}")]
    Llm(#[from] anyhow::Error),
    #[error("could not parse AI response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ask the model whether the asking price is fair.
pub async fn analyze_price(
    ai: &dyn BaseAI,
    request: &PriceCheckRequest,
) -> Result<PriceAssessment, PriceCheckError> {
    let prompt = build_prompt(request);

    info!(
        city = %request.city,
        area = %request.area,
        asking_price = request.asking_price,
        "requesting price analysis"
    );

    let raw = ai.complete_json(&prompt).await?;
    let cleaned = strip_code_fences(&raw);

    let assessment: PriceAssessment = serde_json::from_str(cleaned).inspect_err(|e| {
        warn!(error = %e, "price analysis response was not valid JSON");
    })?;

    Ok(assessment)
}

fn build_prompt(request: &PriceCheckRequest) -> String {
    let mut prompt = format!(
        "You are a real estate pricing expert for the Pakistani property market.\n\
         Analyze whether the following asking price is fair.\n\n\
         Property details:\n\
         - Type: {}\n\
         - Location: {}, {}\n\
         - Size: {} {}\n\
         - Asking price: PKR {} ({})\n",
        request.property_type,
        request.area,
        request.city,
        request.size_value,
        request.size_unit,
        request.asking_price,
        format_price(request.asking_price),
    );

    if let Some(road_access) = &request.road_access {
        prompt.push_str(&format!("- Road access: {road_access}\n"));
    }
    if let Some(quality) = &request.construction_quality {
        prompt.push_str(&format!("- Construction quality: {quality}\n"));
    }
    if let Some(amenities) = &request.nearby_amenities {
        prompt.push_str(&format!("- Nearby amenities: {amenities}\n"));
    }
    if let Some(details) = &request.additional_details {
        prompt.push_str(&format!("- Additional details: {details}\n"));
    }

    prompt.push_str(
        "\nRespond with ONLY a JSON object, no prose, in exactly this shape:\n\
         {\n\
           \"verdict\": \"underpriced\" | \"fair\" | \"overpriced\",\n\
           \"estimatedRange\": { \"min\": <PKR integer>, \"max\": <PKR integer> },\n\
           \"confidence\": \"low\" | \"medium\" | \"high\",\n\
           \"explanation\": \"<2-3 sentence explanation>\",\n\
           \"factors\": [\n\
             { \"factor\": \"<name>\", \"impact\": \"positive\" | \"negative\" | \"neutral\", \"note\": \"<short note>\" }\n\
           ]\n\
         }\n",
    );

    prompt
}

/// Models often wrap JSON in ``` fences despite instructions. Strip them.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence line.
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::pricing::types::Verdict;
    use crate::domains::properties::models::PropertyType;
    use crate::kernel::MockAI;

    fn request() -> PriceCheckRequest {
        PriceCheckRequest {
            asking_price: 25_000_000,
            property_type: PropertyType::House,
            city: "Lahore".to_string(),
            area: "DHA Phase 5".to_string(),
            size_value: 10.0,
            size_unit: "marla".to_string(),
            road_access: Some("main-boulevard".to_string()),
            construction_quality: None,
            nearby_amenities: Some("schools, parks".to_string()),
            additional_details: None,
        }
    }

    const ASSESSMENT_JSON: &str = r#"{
        "verdict": "fair",
        "estimatedRange": {"min": 23000000, "max": 27000000},
        "confidence": "high",
        "explanation": "In line with recent sales.",
        "factors": [{"factor": "Location", "impact": "positive", "note": "Prime phase"}]
    }"#;

    #[tokio::test]
    async fn test_analyze_price_parses_model_json() {
        let ai = MockAI::new().with_response(ASSESSMENT_JSON);
        let assessment = analyze_price(&ai, &request()).await.unwrap();
        assert_eq!(assessment.verdict, Verdict::Fair);
        assert_eq!(assessment.estimated_range.max, 27_000_000);
    }

    #[tokio::test]
    async fn test_analyze_price_strips_markdown_fences() {
        let fenced = format!("```json\n{ASSESSMENT_JSON}\n```");
        let ai = MockAI::new().with_response(fenced);
        let assessment = analyze_price(&ai, &request()).await.unwrap();
        assert_eq!(assessment.verdict, Verdict::Fair);
    }

    #[tokio::test]
    async fn test_analyze_price_rejects_non_json() {
        let ai = MockAI::new().with_response("I think the price looks reasonable.");
        let err = analyze_price(&ai, &request()).await.unwrap_err();
        assert!(matches!(err, PriceCheckError::Parse(_)));
    }

    #[tokio::test]
    async fn test_prompt_includes_property_details() {
        let ai = MockAI::new().with_response(ASSESSMENT_JSON);
        analyze_price(&ai, &request()).await.unwrap();

        let prompt = ai.last_prompt().unwrap();
        assert!(prompt.contains("DHA Phase 5, Lahore"));
        assert!(prompt.contains("10 marla"));
        assert!(prompt.contains("Road access: main-boulevard"));
        assert!(prompt.contains("2.50 Crore"));
        assert!(!prompt.contains("Construction quality"));
    }

    #[test]
    fn test_strip_code_fences_variants() {
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }
}
