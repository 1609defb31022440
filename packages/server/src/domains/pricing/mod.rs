//! Price checker: is an asking price fair?
//!
//! Two branches share one result shape. `heuristic` is a local rule-based
//! assessment that needs no external service; `analyst` asks an LLM and
//! parses its JSON verdict. Both produce a `PriceAssessment`.

pub mod analyst;
pub mod data;
pub mod edges;
pub mod heuristic;
pub mod types;

pub use analyst::{analyze_price, PriceCheckError};
pub use heuristic::quick_assessment;
pub use types::{
    Confidence, EstimatedRange, Impact, PriceAssessment, PriceCheckRequest, PriceFactor, Verdict,
};
