use std::sync::Arc;

use juniper::{FieldError, FieldResult};
use tracing::info;

use crate::domains::pricing::analyst::{analyze_price, PriceCheckError};
use crate::domains::pricing::data::{PriceAssessmentData, PriceCheckInput};
use crate::domains::pricing::edges::query::to_request;
use crate::kernel::BaseAI;

fn field_err(msg: impl Into<String>) -> FieldError {
    FieldError::new(msg.into(), juniper::Value::null())
}

/// Full AI-backed price analysis
pub async fn check_price(
    ai: Option<&Arc<dyn BaseAI>>,
    input: PriceCheckInput,
) -> FieldResult<PriceAssessmentData> {
    let Some(ai) = ai else {
        return Err(field_err(format!("{}", PriceCheckError::NotConfigured)));
    };
    let request = to_request(input)?;

    let assessment = analyze_price(ai.as_ref(), &request)
        .await
        .map_err(|e| match e {
            PriceCheckError::Parse(_) => {
                field_err("Price analysis returned an unreadable response, try again")
            }
            other => field_err(format!("{}", other)),
        })?;

    info!(
        city = %request.city,
        area = %request.area,
        verdict = ?assessment.verdict,
        "Price analysis completed"
    );
    Ok(PriceAssessmentData::from(assessment))
}
