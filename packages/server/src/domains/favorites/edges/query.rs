use juniper::{FieldError, FieldResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domains::favorites::models::Favorite;
use crate::domains::properties::data::PropertyData;

/// The user's favorited properties, newest favorite first
pub async fn query_favorites(pool: &PgPool, user_id: Uuid) -> FieldResult<Vec<PropertyData>> {
    let properties = Favorite::find_properties_for_user(user_id, pool)
        .await
        .map_err(|_| FieldError::new("Database error", juniper::Value::null()))?;
    Ok(properties.into_iter().map(PropertyData::from).collect())
}

/// Just the favorited property ids (card badge state)
pub async fn query_favorite_ids(pool: &PgPool, user_id: Uuid) -> FieldResult<Vec<Uuid>> {
    Favorite::find_ids_for_user(user_id, pool)
        .await
        .map_err(|_| FieldError::new("Database error", juniper::Value::null()))
}
