//! GraphQL types for the price checker.
//!
//! PKR amounts are exposed as Float because GraphQL Int is 32-bit and
//! Crore-scale prices overflow it.

use juniper::{GraphQLEnum, GraphQLInputObject, GraphQLObject};

use super::types::{
    Confidence, EstimatedRange, Impact, PriceAssessment, PriceFactor, Verdict,
};

#[derive(Debug, Clone, GraphQLInputObject)]
pub struct PriceCheckInput {
    pub asking_price: f64,
    pub property_type: String,
    pub city: String,
    pub area: String,
    pub size_value: f64,
    pub size_unit: String,
    pub road_access: Option<String>,
    pub construction_quality: Option<String>,
    pub nearby_amenities: Option<String>,
    pub additional_details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum VerdictData {
    Underpriced,
    Fair,
    Overpriced,
}

impl From<Verdict> for VerdictData {
    fn from(v: Verdict) -> Self {
        match v {
            Verdict::Underpriced => Self::Underpriced,
            Verdict::Fair => Self::Fair,
            Verdict::Overpriced => Self::Overpriced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum ConfidenceData {
    Low,
    Medium,
    High,
}

impl From<Confidence> for ConfidenceData {
    fn from(c: Confidence) -> Self {
        match c {
            Confidence::Low => Self::Low,
            Confidence::Medium => Self::Medium,
            Confidence::High => Self::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum ImpactData {
    Positive,
    Negative,
    Neutral,
}

impl From<Impact> for ImpactData {
    fn from(i: Impact) -> Self {
        match i {
            Impact::Positive => Self::Positive,
            Impact::Negative => Self::Negative,
            Impact::Neutral => Self::Neutral,
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct EstimatedRangeData {
    pub min: f64,
    pub max: f64,
}

impl From<EstimatedRange> for EstimatedRangeData {
    fn from(r: EstimatedRange) -> Self {
        Self {
            min: r.min as f64,
            max: r.max as f64,
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct PriceFactorData {
    pub factor: String,
    pub impact: ImpactData,
    pub note: String,
}

impl From<PriceFactor> for PriceFactorData {
    fn from(f: PriceFactor) -> Self {
        Self {
            factor: f.factor,
            impact: f.impact.into(),
            note: f.note,
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct PriceAssessmentData {
    pub verdict: VerdictData,
    pub estimated_range: EstimatedRangeData,
    pub confidence: ConfidenceData,
    pub explanation: String,
    pub factors: Vec<PriceFactorData>,
}

impl From<PriceAssessment> for PriceAssessmentData {
    fn from(a: PriceAssessment) -> Self {
        Self {
            verdict: a.verdict.into(),
            estimated_range: a.estimated_range.into(),
            confidence: a.confidence.into(),
            explanation: a.explanation,
            factors: a.factors.into_iter().map(Into::into).collect(),
        }
    }
}
