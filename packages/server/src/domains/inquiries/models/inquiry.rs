use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::domains::properties::models::Property;

/// Max inquiries per sender per rolling hour.
const RATE_LIMIT_PER_HOUR: i64 = 5;

/// Inquiry - a message from an interested party to a listing owner
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Inquiry {
    pub id: Uuid,
    pub property_id: Uuid,
    pub owner_id: Uuid,
    // Sender may be anonymous (no account), hence the optional id
    pub sender_id: Option<Uuid>,
    pub sender_name: String,
    pub sender_email: String,
    pub sender_phone: Option<String>,
    pub inquiry_type: String, // 'visit', 'price', 'details', 'offer'
    pub message: String,
    pub status: String, // 'pending', 'responded', 'closed'
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum InquiryError {
    #[error("property not found")]
    PropertyNotFound,
    #[error("property is not active")]
    PropertyInactive,
    #[error("cannot inquire about your own listing")]
    OwnListing,
    #[error("too many inquiries, try again later")]
    RateLimited,
    #[error(transparent)]
    Database(#[from] anyhow::Error),
}

/// Input for creating an inquiry
#[derive(Debug, Clone)]
pub struct NewInquiry {
    pub property_id: Uuid,
    pub sender_id: Option<Uuid>,
    pub sender_name: String,
    pub sender_email: String,
    pub sender_phone: Option<String>,
    pub inquiry_type: String,
    pub message: String,
}

/// Inquiry status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    Pending,
    Responded,
    Closed,
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InquiryStatus::Pending => write!(f, "pending"),
            InquiryStatus::Responded => write!(f, "responded"),
            InquiryStatus::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for InquiryStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(InquiryStatus::Pending),
            "responded" => Ok(InquiryStatus::Responded),
            "closed" => Ok(InquiryStatus::Closed),
            _ => Err(anyhow::anyhow!("Invalid inquiry status: {}", s)),
        }
    }
}

impl Inquiry {
    /// Create an inquiry after validating the target and the sender's rate.
    ///
    /// Rules: target must exist and be active, owners can't inquire on their
    /// own listing, and a sender gets at most 5 inquiries per hour.
    pub async fn create(new: &NewInquiry, pool: &PgPool) -> Result<Self, InquiryError> {
        let property = Property::find_by_id(new.property_id, pool)
            .await?
            .ok_or(InquiryError::PropertyNotFound)?;

        if property.status != "active" {
            return Err(InquiryError::PropertyInactive);
        }
        if new.sender_id == Some(property.user_id) {
            return Err(InquiryError::OwnListing);
        }

        if let Some(sender_id) = new.sender_id {
            let recent = Self::count_recent_for_sender(sender_id, pool).await?;
            if recent >= RATE_LIMIT_PER_HOUR {
                return Err(InquiryError::RateLimited);
            }
        }

        let inquiry = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO inquiries (
                property_id, owner_id, sender_id, sender_name,
                sender_email, sender_phone, inquiry_type, message
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(new.property_id)
        .bind(property.user_id)
        .bind(new.sender_id)
        .bind(&new.sender_name)
        .bind(&new.sender_email)
        .bind(&new.sender_phone)
        .bind(&new.inquiry_type)
        .bind(&new.message)
        .fetch_one(pool)
        .await
        .map_err(|e| InquiryError::Database(e.into()))?;

        Ok(inquiry)
    }

    async fn count_recent_for_sender(sender_id: Uuid, pool: &PgPool) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM inquiries
            WHERE sender_id = $1 AND created_at > NOW() - INTERVAL '1 hour'
            "#,
        )
        .bind(sender_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Owner's inbox, newest first.
    pub async fn find_for_owner(owner_id: Uuid, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM inquiries WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Inquiries against a single property (owner detail view).
    pub async fn find_for_property(property_id: Uuid, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM inquiries WHERE property_id = $1 ORDER BY created_at DESC",
        )
        .bind(property_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Owner-scoped status transition.
    pub async fn update_status(
        id: Uuid,
        owner_id: Uuid,
        status: InquiryStatus,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE inquiries SET status = $3, updated_at = NOW()
            WHERE id = $1 AND owner_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(status.to_string())
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["pending", "responded", "closed"] {
            let status: InquiryStatus = s.parse().unwrap();
            assert_eq!(status.to_string(), s);
        }
        assert!("spam".parse::<InquiryStatus>().is_err());
    }
}
