use juniper::{FieldError, FieldResult};
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::domains::properties::data::{PropertyConnection, PropertyData, PropertyFilterInput};
use crate::domains::properties::models::{Property, PropertyFilter};

fn to_model_filter(input: PropertyFilterInput) -> FieldResult<PropertyFilter> {
    let property_type = input
        .property_type
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(|e| FieldError::new(format!("{}", e), juniper::Value::null()))?;
    let listing_type = input
        .listing_type
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(|e| FieldError::new(format!("{}", e), juniper::Value::null()))?;

    Ok(PropertyFilter {
        city: input.city,
        area: input.area,
        property_type,
        listing_type,
        min_price: input.min_price.map(|p| p as i64),
        max_price: input.max_price.map(|p| p as i64),
        min_bedrooms: input.min_bedrooms,
        search: input.search,
    })
}

/// Browse active properties with filters and offset pagination
pub async fn query_properties(
    pool: &PgPool,
    filter: Option<PropertyFilterInput>,
    limit: Option<i32>,
    offset: Option<i32>,
) -> FieldResult<PropertyConnection> {
    let limit = limit.unwrap_or(20).clamp(1, 50);
    let offset = offset.unwrap_or(0).max(0);
    let filter = to_model_filter(filter.unwrap_or_default())?;

    let properties = Property::search(&filter, limit as i64, offset as i64, pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Property search failed");
            FieldError::new("Database error", juniper::Value::null())
        })?;

    let total_count = Property::count(&filter, pool).await.map_err(|e| {
        warn!(error = %e, "Property count failed");
        FieldError::new("Database error", juniper::Value::null())
    })?;

    let has_next_page = (offset + limit) < total_count as i32;

    Ok(PropertyConnection {
        nodes: properties.into_iter().map(PropertyData::from).collect(),
        total_count: total_count as i32,
        has_next_page,
    })
}

/// Get a single property by id, bumping its view counter.
pub async fn query_property(pool: &PgPool, id: Uuid) -> FieldResult<Option<PropertyData>> {
    let property = Property::find_by_id(id, pool)
        .await
        .map_err(|_| FieldError::new("Database error", juniper::Value::null()))?;

    // Best-effort: a lost increment is fine, a failed detail page is not.
    if property.is_some() {
        if let Err(e) = Property::increment_views(id, pool).await {
            warn!(property_id = %id, error = %e, "Failed to increment view counter");
        }
    }

    Ok(property.map(PropertyData::from))
}

/// Featured properties for the home page
pub async fn query_featured_properties(
    pool: &PgPool,
    limit: Option<i32>,
) -> FieldResult<Vec<PropertyData>> {
    let limit = limit.unwrap_or(6).clamp(1, 20) as i64;
    let properties = Property::find_featured(limit, pool)
        .await
        .map_err(|_| FieldError::new("Database error", juniper::Value::null()))?;
    Ok(properties.into_iter().map(PropertyData::from).collect())
}

/// All of an owner's listings, any status (dashboard)
pub async fn query_my_properties(pool: &PgPool, user_id: Uuid) -> FieldResult<Vec<PropertyData>> {
    let properties = Property::find_by_owner(user_id, pool)
        .await
        .map_err(|_| FieldError::new("Database error", juniper::Value::null()))?;
    Ok(properties.into_iter().map(PropertyData::from).collect())
}
