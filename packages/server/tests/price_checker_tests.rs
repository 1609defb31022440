//! End-to-end tests for the price checker: the rule-based branch and the
//! LLM branch through a mocked AI client.

use server_core::domains::pricing::analyst::{analyze_price, PriceCheckError};
use server_core::domains::pricing::heuristic::quick_assessment;
use server_core::domains::pricing::types::{
    Confidence, Impact, PriceAssessment, PriceCheckRequest, Verdict,
};
use server_core::domains::properties::models::PropertyType;
use server_core::kernel::MockAI;

fn plot_request() -> PriceCheckRequest {
    PriceCheckRequest {
        asking_price: 12_000_000,
        property_type: PropertyType::Plot,
        city: "Islamabad".to_string(),
        area: "DHA Phase 2".to_string(),
        size_value: 1.0,
        size_unit: "kanal".to_string(),
        road_access: Some("corner-plot".to_string()),
        construction_quality: None,
        nearby_amenities: None,
        additional_details: None,
    }
}

fn house_request() -> PriceCheckRequest {
    PriceCheckRequest {
        asking_price: 80_000_000,
        property_type: PropertyType::House,
        city: "Lahore".to_string(),
        area: "Gulberg".to_string(),
        size_value: 1.0,
        size_unit: "kanal".to_string(),
        road_access: None,
        construction_quality: Some("standard".to_string()),
        nearby_amenities: Some("schools nearby".to_string()),
        additional_details: Some("needs renovation".to_string()),
    }
}

// =============================================================================
// Heuristic branch
// =============================================================================

#[test]
fn corner_plot_gets_fair_verdict_with_tight_range() {
    let assessment = quick_assessment(&plot_request());

    assert_eq!(assessment.verdict, Verdict::Fair);
    assert_eq!(assessment.confidence, Confidence::Medium);
    assert_eq!(assessment.estimated_range.min, 10_800_000);
    assert_eq!(assessment.estimated_range.max, 13_200_000);
}

#[test]
fn standard_construction_gets_overpriced_verdict_with_wide_range() {
    let assessment = quick_assessment(&house_request());

    assert_eq!(assessment.verdict, Verdict::Overpriced);
    assert_eq!(assessment.estimated_range.min, 60_000_000);
    assert_eq!(assessment.estimated_range.max, 100_000_000);
}

#[test]
fn heuristic_lead_factor_matches_property_kind() {
    let plot = quick_assessment(&plot_request());
    assert_eq!(plot.factors[0].factor, "Road Access");
    assert_eq!(plot.factors[0].impact, Impact::Positive);

    let house = quick_assessment(&house_request());
    assert_eq!(house.factors[0].factor, "Construction Quality");
    assert_eq!(house.factors[0].impact, Impact::Negative);
}

// =============================================================================
// LLM branch
// =============================================================================

const MODEL_JSON: &str = r#"{
    "verdict": "underpriced",
    "estimatedRange": {"min": 85000000, "max": 95000000},
    "confidence": "medium",
    "explanation": "Recent comparable sales in Gulberg exceed the asking price.",
    "factors": [
        {"factor": "Location", "impact": "positive", "note": "High-demand area"},
        {"factor": "Condition", "impact": "negative", "note": "Needs renovation"}
    ]
}"#;

#[tokio::test]
async fn llm_branch_returns_parsed_assessment() {
    let ai = MockAI::new().with_response(MODEL_JSON);
    let assessment = analyze_price(&ai, &house_request()).await.unwrap();

    assert_eq!(assessment.verdict, Verdict::Underpriced);
    assert_eq!(assessment.estimated_range.min, 85_000_000);
    assert_eq!(assessment.confidence, Confidence::Medium);
    assert_eq!(assessment.factors.len(), 2);
}

#[tokio::test]
async fn llm_branch_tolerates_fenced_json() {
    let ai = MockAI::new().with_response(format!("```json\n{MODEL_JSON}\n```"));
    let assessment = analyze_price(&ai, &house_request()).await.unwrap();
    assert_eq!(assessment.verdict, Verdict::Underpriced);
}

#[tokio::test]
async fn llm_branch_sends_all_optional_details() {
    let ai = MockAI::new().with_response(MODEL_JSON);
    analyze_price(&ai, &house_request()).await.unwrap();

    assert_eq!(ai.call_count(), 1);
    assert!(ai.was_called_with("Gulberg, Lahore"));
    assert!(ai.was_called_with("Construction quality: standard"));
    assert!(ai.was_called_with("Nearby amenities: schools nearby"));
    assert!(ai.was_called_with("Additional details: needs renovation"));
}

#[tokio::test]
async fn llm_branch_demands_json_contract_in_prompt() {
    let ai = MockAI::new().with_response(MODEL_JSON);
    analyze_price(&ai, &plot_request()).await.unwrap();

    let prompt = ai.last_prompt().unwrap();
    assert!(prompt.contains("\"verdict\""));
    assert!(prompt.contains("\"estimatedRange\""));
    assert!(prompt.contains("\"factors\""));
    assert!(prompt.contains("Road access: corner-plot"));
}

#[tokio::test]
async fn llm_branch_surfaces_parse_failures() {
    let ai = MockAI::new().with_response("The price seems about right to me.");
    let err = analyze_price(&ai, &house_request()).await.unwrap_err();
    assert!(matches!(err, PriceCheckError::Parse(_)));
}

#[tokio::test]
async fn mock_json_helper_round_trips_assessment() {
    let expected: PriceAssessment = serde_json::from_str(MODEL_JSON).unwrap();
    let ai = MockAI::new().with_json_response(&expected);

    let assessment = analyze_price(&ai, &house_request()).await.unwrap();
    assert_eq!(assessment.verdict, expected.verdict);
    assert_eq!(assessment.explanation, expected.explanation);
}
