use juniper::{FieldError, FieldResult};
use sqlx::PgPool;

use crate::domains::spots::data::SpotData;
use crate::domains::spots::models::Spot;

/// Points of interest in a city, optionally filtered by category
pub async fn query_spots(
    pool: &PgPool,
    city: String,
    category: Option<String>,
) -> FieldResult<Vec<SpotData>> {
    let category = category
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(|e| FieldError::new(format!("{}", e), juniper::Value::null()))?;

    let spots = Spot::find_by_city(&city, category, pool)
        .await
        .map_err(|_| FieldError::new("Database error", juniper::Value::null()))?;

    Ok(spots.into_iter().map(SpotData::from).collect())
}

/// Points of interest around one area (property detail panel)
pub async fn query_area_spots(
    pool: &PgPool,
    city: String,
    area: String,
) -> FieldResult<Vec<SpotData>> {
    let spots = Spot::find_by_area(&city, &area, pool)
        .await
        .map_err(|_| FieldError::new("Database error", juniper::Value::null()))?;

    Ok(spots.into_iter().map(SpotData::from).collect())
}
