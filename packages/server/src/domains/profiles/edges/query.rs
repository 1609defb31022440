use chrono::{DateTime, Utc};
use juniper::{FieldError, FieldResult, GraphQLObject};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domains::profiles::models::Profile;

/// GraphQL type for a profile
#[derive(Debug, Clone, GraphQLObject)]
pub struct ProfileData {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileData {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            full_name: p.full_name,
            phone: p.phone,
            city: p.city,
            avatar_url: p.avatar_url,
            created_at: p.created_at,
        }
    }
}

/// A user's public profile
pub async fn query_profile(pool: &PgPool, user_id: Uuid) -> FieldResult<Option<ProfileData>> {
    let profile = Profile::find_by_user(user_id, pool)
        .await
        .map_err(|_| FieldError::new("Database error", juniper::Value::null()))?;
    Ok(profile.map(ProfileData::from))
}
