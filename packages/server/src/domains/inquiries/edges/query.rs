use juniper::{FieldError, FieldResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domains::inquiries::data::InquiryData;
use crate::domains::inquiries::models::Inquiry;

/// The calling owner's inquiry inbox
pub async fn query_my_inquiries(pool: &PgPool, owner_id: Uuid) -> FieldResult<Vec<InquiryData>> {
    let inquiries = Inquiry::find_for_owner(owner_id, pool)
        .await
        .map_err(|_| FieldError::new("Database error", juniper::Value::null()))?;
    Ok(inquiries.into_iter().map(InquiryData::from).collect())
}

/// Inquiries against one of the caller's properties
pub async fn query_property_inquiries(
    pool: &PgPool,
    owner_id: Uuid,
    property_id: Uuid,
) -> FieldResult<Vec<InquiryData>> {
    let inquiries = Inquiry::find_for_property(property_id, pool)
        .await
        .map_err(|_| FieldError::new("Database error", juniper::Value::null()))?;

    // Only the owner sees the inbox for a property
    Ok(inquiries
        .into_iter()
        .filter(|i| i.owner_id == owner_id)
        .map(InquiryData::from)
        .collect())
}
