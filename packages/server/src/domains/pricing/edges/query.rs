use juniper::{FieldError, FieldResult};

use crate::domains::pricing::data::{PriceAssessmentData, PriceCheckInput};
use crate::domains::pricing::heuristic::quick_assessment;
use crate::domains::pricing::types::PriceCheckRequest;

fn field_err(msg: impl Into<String>) -> FieldError {
    FieldError::new(msg.into(), juniper::Value::null())
}

pub(crate) fn to_request(input: PriceCheckInput) -> FieldResult<PriceCheckRequest> {
    if !input.asking_price.is_finite() || input.asking_price <= 0.0 {
        return Err(field_err("Asking price must be a positive number"));
    }
    if input.area.trim().is_empty() {
        return Err(field_err("Area must not be empty"));
    }
    let property_type = input
        .property_type
        .parse()
        .map_err(|e| field_err(format!("{}", e)))?;

    Ok(PriceCheckRequest {
        asking_price: input.asking_price as i64,
        property_type,
        city: input.city,
        area: input.area,
        size_value: input.size_value,
        size_unit: input.size_unit,
        road_access: input.road_access,
        construction_quality: input.construction_quality,
        nearby_amenities: input.nearby_amenities,
        additional_details: input.additional_details,
    })
}

/// Rule-based price assessment, no AI involved
pub fn quick_price_check(input: PriceCheckInput) -> FieldResult<PriceAssessmentData> {
    let request = to_request(input)?;
    Ok(PriceAssessmentData::from(quick_assessment(&request)))
}
