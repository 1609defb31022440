use juniper::{FieldError, FieldResult};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::domains::properties::data::{
    CreatePropertyInput, PropertyData, PropertyStatusData, UpdatePropertyInput,
};
use crate::domains::properties::models::{Property, PropertyUpdate};

fn field_err(msg: impl Into<String>) -> FieldError {
    FieldError::new(msg.into(), juniper::Value::null())
}

/// Create a listing owned by the calling user
pub async fn create_property(
    pool: &PgPool,
    user_id: Uuid,
    input: CreatePropertyInput,
) -> FieldResult<PropertyData> {
    if !input.price.is_finite() || input.price <= 0.0 {
        return Err(field_err("Price must be a positive number"));
    }
    if input.area.trim().is_empty() {
        return Err(field_err("Area must not be empty"));
    }
    let property_type = input
        .property_type
        .parse()
        .map_err(|e| field_err(format!("{}", e)))?;
    let listing_type = input
        .listing_type
        .parse()
        .map_err(|e| field_err(format!("{}", e)))?;

    let property = Property::create(
        user_id,
        &input.title,
        &input.description,
        input.price as i64,
        input.price_unit.as_deref().unwrap_or("total"),
        property_type,
        listing_type,
        &input.city,
        &input.area,
        input.address.as_deref(),
        input.bedrooms,
        input.bathrooms,
        input.size_value,
        &input.size_unit,
        &input.amenities.unwrap_or_default(),
        &input.images.unwrap_or_default(),
        pool,
    )
    .await
    .map_err(|e| field_err(format!("Failed to create property: {}", e)))?;

    info!(property_id = %property.id, user_id = %user_id, "Property created");
    Ok(PropertyData::from(property))
}

/// Edit an owned listing; absent fields stay unchanged
pub async fn update_property(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    input: UpdatePropertyInput,
) -> FieldResult<PropertyData> {
    if let Some(price) = input.price {
        if !price.is_finite() || price <= 0.0 {
            return Err(field_err("Price must be a positive number"));
        }
    }

    let update = PropertyUpdate {
        title: input.title,
        description: input.description,
        price: input.price.map(|p| p as i64),
        price_unit: input.price_unit,
        address: input.address,
        bedrooms: input.bedrooms,
        bathrooms: input.bathrooms,
        amenities: input.amenities,
        images: input.images,
    };

    let property = Property::update(id, user_id, &update, pool)
        .await
        .map_err(|e| field_err(format!("Failed to update property: {}", e)))?
        .ok_or_else(|| field_err("Property not found or not owned by you"))?;

    Ok(PropertyData::from(property))
}

/// Mark an owned listing active/sold/rented/inactive
pub async fn update_property_status(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    status: PropertyStatusData,
) -> FieldResult<PropertyData> {
    let property = Property::update_status(id, user_id, status.into(), pool)
        .await
        .map_err(|e| field_err(format!("Failed to update status: {}", e)))?
        .ok_or_else(|| field_err("Property not found or not owned by you"))?;

    info!(property_id = %id, status = %property.status, "Property status updated");
    Ok(PropertyData::from(property))
}

/// Delete an owned listing
pub async fn delete_property(pool: &PgPool, user_id: Uuid, id: Uuid) -> FieldResult<bool> {
    let deleted = Property::delete(id, user_id, pool)
        .await
        .map_err(|e| field_err(format!("Failed to delete property: {}", e)))?;
    if !deleted {
        return Err(field_err("Property not found or not owned by you"));
    }
    info!(property_id = %id, "Property deleted");
    Ok(true)
}
