use juniper::{FieldError, FieldResult, GraphQLInputObject};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domains::profiles::edges::query::ProfileData;
use crate::domains::profiles::models::Profile;

/// Input for updating the caller's profile; absent fields stay unchanged
#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct UpsertProfileInput {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub avatar_url: Option<String>,
}

/// Create or update the caller's profile
pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    input: UpsertProfileInput,
) -> FieldResult<ProfileData> {
    let profile = Profile::upsert(
        user_id,
        input.full_name.as_deref(),
        input.phone.as_deref(),
        input.city.as_deref(),
        input.avatar_url.as_deref(),
        pool,
    )
    .await
    .map_err(|_| FieldError::new("Database error", juniper::Value::null()))?;

    Ok(ProfileData::from(profile))
}
