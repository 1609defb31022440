use juniper::{FieldError, FieldResult};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domains::inquiries::data::{CreateInquiryInput, InquiryData, InquiryStatusData};
use crate::domains::inquiries::models::{Inquiry, InquiryError, NewInquiry};

fn field_err(msg: impl Into<String>) -> FieldError {
    FieldError::new(msg.into(), juniper::Value::null())
}

/// Send an inquiry to a listing owner. Anonymous senders are allowed;
/// signed-in senders are rate limited per hour.
pub async fn create_inquiry(
    pool: &PgPool,
    sender_id: Option<Uuid>,
    input: CreateInquiryInput,
) -> FieldResult<InquiryData> {
    if input.message.trim().is_empty() {
        return Err(field_err("Message must not be empty"));
    }

    let new = NewInquiry {
        property_id: input.property_id,
        sender_id,
        sender_name: input.sender_name,
        sender_email: input.sender_email,
        sender_phone: input.sender_phone,
        inquiry_type: input.inquiry_type,
        message: input.message,
    };

    let inquiry = Inquiry::create(&new, pool).await.map_err(|e| match e {
        InquiryError::PropertyNotFound => field_err("Property not found"),
        InquiryError::PropertyInactive => field_err("Property is no longer active"),
        InquiryError::OwnListing => field_err("You cannot inquire about your own listing"),
        InquiryError::RateLimited => {
            warn!(sender_id = ?sender_id, "Inquiry rate limit hit");
            field_err("Too many inquiries, please try again later")
        }
        InquiryError::Database(e) => {
            warn!(error = %e, "Inquiry creation failed");
            field_err("Database error")
        }
    })?;

    info!(inquiry_id = %inquiry.id, property_id = %inquiry.property_id, "Inquiry created");
    Ok(InquiryData::from(inquiry))
}

/// Owner marks an inquiry responded/closed
pub async fn update_inquiry_status(
    pool: &PgPool,
    owner_id: Uuid,
    id: Uuid,
    status: InquiryStatusData,
) -> FieldResult<InquiryData> {
    let inquiry = Inquiry::update_status(id, owner_id, status.into(), pool)
        .await
        .map_err(|_| field_err("Database error"))?
        .ok_or_else(|| field_err("Inquiry not found or not yours"))?;

    Ok(InquiryData::from(inquiry))
}
