use juniper::{FieldError, FieldResult};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::domains::favorites::models::Favorite;
use crate::domains::properties::models::Property;

/// Toggle a favorite; returns the resulting state (true = favorited)
pub async fn toggle_favorite(
    pool: &PgPool,
    user_id: Uuid,
    property_id: Uuid,
) -> FieldResult<bool> {
    let exists = Property::find_by_id(property_id, pool)
        .await
        .map_err(|_| FieldError::new("Database error", juniper::Value::null()))?
        .is_some();
    if !exists {
        return Err(FieldError::new("Property not found", juniper::Value::null()));
    }

    let favorited = Favorite::toggle(user_id, property_id, pool)
        .await
        .map_err(|_| FieldError::new("Database error", juniper::Value::null()))?;

    info!(user_id = %user_id, property_id = %property_id, favorited, "Favorite toggled");
    Ok(favorited)
}
