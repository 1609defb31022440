//! GraphQL data types for inquiries.

use chrono::{DateTime, Utc};
use juniper::{GraphQLEnum, GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use crate::domains::inquiries::models::{Inquiry, InquiryStatus};

/// GraphQL type for an inquiry
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "An inquiry sent to a listing owner")]
pub struct InquiryData {
    pub id: Uuid,
    pub property_id: Uuid,
    pub owner_id: Uuid,
    pub sender_id: Option<Uuid>,
    pub sender_name: String,
    pub sender_email: String,
    pub sender_phone: Option<String>,
    pub inquiry_type: String,
    pub message: String,
    pub status: InquiryStatusData,
    pub created_at: DateTime<Utc>,
}

impl From<Inquiry> for InquiryData {
    fn from(i: Inquiry) -> Self {
        let status = i
            .status
            .parse::<InquiryStatus>()
            .unwrap_or(InquiryStatus::Pending);
        Self {
            id: i.id,
            property_id: i.property_id,
            owner_id: i.owner_id,
            sender_id: i.sender_id,
            sender_name: i.sender_name,
            sender_email: i.sender_email,
            sender_phone: i.sender_phone,
            inquiry_type: i.inquiry_type,
            message: i.message,
            status: status.into(),
            created_at: i.created_at,
        }
    }
}

/// Inquiry status for GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum InquiryStatusData {
    Pending,
    Responded,
    Closed,
}

impl From<InquiryStatus> for InquiryStatusData {
    fn from(status: InquiryStatus) -> Self {
        match status {
            InquiryStatus::Pending => InquiryStatusData::Pending,
            InquiryStatus::Responded => InquiryStatusData::Responded,
            InquiryStatus::Closed => InquiryStatusData::Closed,
        }
    }
}

impl From<InquiryStatusData> for InquiryStatus {
    fn from(status: InquiryStatusData) -> Self {
        match status {
            InquiryStatusData::Pending => InquiryStatus::Pending,
            InquiryStatusData::Responded => InquiryStatus::Responded,
            InquiryStatusData::Closed => InquiryStatus::Closed,
        }
    }
}

/// Input for sending an inquiry
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreateInquiryInput {
    pub property_id: Uuid,
    pub sender_name: String,
    pub sender_email: String,
    pub sender_phone: Option<String>,
    pub inquiry_type: String,
    pub message: String,
}
