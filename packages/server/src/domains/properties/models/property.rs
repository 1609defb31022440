use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Property - a marketplace listing for sale, rent, or land
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Property {
    pub id: Uuid,
    pub user_id: Uuid,

    // Content
    pub title: String,
    pub description: String,

    // Pricing (PKR, smallest unit)
    pub price: i64,
    pub price_unit: String, // 'total', 'monthly', 'yearly', 'per_marla', 'per_kanal'

    // Classification
    pub property_type: String, // 'house', 'apartment', 'plot', 'commercial', 'farmhouse'
    pub listing_type: String,  // 'rent', 'sale', 'land'

    // Location
    pub city: String,
    pub area: String,
    pub address: Option<String>,

    // Layout
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub size_value: f64,
    pub size_unit: String, // 'marla', 'kanal', 'sqft', 'sqyd'

    pub amenities: Vec<String>,
    pub images: Vec<String>,

    pub status: String, // 'active', 'sold', 'rented', 'inactive'
    pub featured: bool,
    pub verified: bool,
    pub views: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Enums for type-safe edges
// =============================================================================

/// Property type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Apartment,
    Plot,
    Commercial,
    Farmhouse,
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyType::House => write!(f, "house"),
            PropertyType::Apartment => write!(f, "apartment"),
            PropertyType::Plot => write!(f, "plot"),
            PropertyType::Commercial => write!(f, "commercial"),
            PropertyType::Farmhouse => write!(f, "farmhouse"),
        }
    }
}

impl std::str::FromStr for PropertyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "house" => Ok(PropertyType::House),
            "apartment" => Ok(PropertyType::Apartment),
            "plot" => Ok(PropertyType::Plot),
            "commercial" => Ok(PropertyType::Commercial),
            "farmhouse" => Ok(PropertyType::Farmhouse),
            _ => Err(anyhow::anyhow!("Invalid property type: {}", s)),
        }
    }
}

/// Listing type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    Rent,
    Sale,
    Land,
}

impl std::fmt::Display for ListingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingType::Rent => write!(f, "rent"),
            ListingType::Sale => write!(f, "sale"),
            ListingType::Land => write!(f, "land"),
        }
    }
}

impl std::str::FromStr for ListingType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rent" => Ok(ListingType::Rent),
            "sale" => Ok(ListingType::Sale),
            "land" => Ok(ListingType::Land),
            _ => Err(anyhow::anyhow!("Invalid listing type: {}", s)),
        }
    }
}

/// Property status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Active,
    Sold,
    Rented,
    Inactive,
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyStatus::Active => write!(f, "active"),
            PropertyStatus::Sold => write!(f, "sold"),
            PropertyStatus::Rented => write!(f, "rented"),
            PropertyStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for PropertyStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(PropertyStatus::Active),
            "sold" => Ok(PropertyStatus::Sold),
            "rented" => Ok(PropertyStatus::Rented),
            "inactive" => Ok(PropertyStatus::Inactive),
            _ => Err(anyhow::anyhow!("Invalid property status: {}", s)),
        }
    }
}

/// Composable search filters. Every field is optional; absent filters match
/// everything.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    pub city: Option<String>,
    pub area: Option<String>,
    pub property_type: Option<PropertyType>,
    pub listing_type: Option<ListingType>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_bedrooms: Option<i32>,
    pub search: Option<String>,
}

/// Fields accepted by update; None leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct PropertyUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub price_unit: Option<String>,
    pub address: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

impl Property {
    /// Search active properties with composable filters, newest first.
    pub async fn search(
        filter: &PropertyFilter,
        limit: i64,
        offset: i64,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM properties
            WHERE status = 'active'
              AND ($1::text IS NULL OR city = $1)
              AND ($2::text IS NULL OR area = $2)
              AND ($3::text IS NULL OR property_type = $3)
              AND ($4::text IS NULL OR listing_type = $4)
              AND ($5::bigint IS NULL OR price >= $5)
              AND ($6::bigint IS NULL OR price <= $6)
              AND ($7::int IS NULL OR bedrooms >= $7)
              AND ($8::text IS NULL OR title ILIKE '%' || $8 || '%' OR area ILIKE '%' || $8 || '%')
            ORDER BY featured DESC, created_at DESC
            LIMIT $9 OFFSET $10
            "#,
        )
        .bind(&filter.city)
        .bind(&filter.area)
        .bind(filter.property_type.map(|t| t.to_string()))
        .bind(filter.listing_type.map(|t| t.to_string()))
        .bind(filter.min_price)
        .bind(filter.max_price)
        .bind(filter.min_bedrooms)
        .bind(&filter.search)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Count active properties matching the filter (for pagination).
    pub async fn count(filter: &PropertyFilter, pool: &PgPool) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM properties
            WHERE status = 'active'
              AND ($1::text IS NULL OR city = $1)
              AND ($2::text IS NULL OR area = $2)
              AND ($3::text IS NULL OR property_type = $3)
              AND ($4::text IS NULL OR listing_type = $4)
              AND ($5::bigint IS NULL OR price >= $5)
              AND ($6::bigint IS NULL OR price <= $6)
              AND ($7::int IS NULL OR bedrooms >= $7)
              AND ($8::text IS NULL OR title ILIKE '%' || $8 || '%' OR area ILIKE '%' || $8 || '%')
            "#,
        )
        .bind(&filter.city)
        .bind(&filter.area)
        .bind(filter.property_type.map(|t| t.to_string()))
        .bind(filter.listing_type.map(|t| t.to_string()))
        .bind(filter.min_price)
        .bind(filter.max_price)
        .bind(filter.min_bedrooms)
        .bind(&filter.search)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Active properties in a city, capped, for the map view.
    pub async fn find_for_map(city: &str, limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM properties
            WHERE status = 'active' AND city = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(city)
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_featured(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM properties
            WHERE status = 'active' AND featured
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// All of an owner's properties regardless of status (dashboard view).
    pub async fn find_by_owner(user_id: Uuid, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM properties WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Fetch up to four properties by id for side-by-side comparison,
    /// preserving the requested order. Unknown ids are skipped.
    pub async fn find_for_comparison(ids: &[Uuid], pool: &PgPool) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>("SELECT * FROM properties WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await?;
        let mut ordered = Vec::with_capacity(rows.len());
        for id in ids {
            if let Some(row) = rows.iter().find(|p| p.id == *id) {
                ordered.push(row.clone());
            }
        }
        Ok(ordered)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        user_id: Uuid,
        title: &str,
        description: &str,
        price: i64,
        price_unit: &str,
        property_type: PropertyType,
        listing_type: ListingType,
        city: &str,
        area: &str,
        address: Option<&str>,
        bedrooms: Option<i32>,
        bathrooms: Option<i32>,
        size_value: f64,
        size_unit: &str,
        amenities: &[String],
        images: &[String],
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO properties (
                user_id, title, description, price, price_unit,
                property_type, listing_type, city, area, address,
                bedrooms, bathrooms, size_value, size_unit, amenities, images
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(price)
        .bind(price_unit)
        .bind(property_type.to_string())
        .bind(listing_type.to_string())
        .bind(city)
        .bind(area)
        .bind(address)
        .bind(bedrooms)
        .bind(bathrooms)
        .bind(size_value)
        .bind(size_unit)
        .bind(amenities)
        .bind(images)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Update a listing's editable fields. Owner-scoped: returns None when
    /// the row doesn't exist or belongs to someone else.
    pub async fn update(
        id: Uuid,
        user_id: Uuid,
        update: &PropertyUpdate,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE properties SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                price = COALESCE($5, price),
                price_unit = COALESCE($6, price_unit),
                address = COALESCE($7, address),
                bedrooms = COALESCE($8, bedrooms),
                bathrooms = COALESCE($9, bathrooms),
                amenities = COALESCE($10, amenities),
                images = COALESCE($11, images),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.title)
        .bind(&update.description)
        .bind(update.price)
        .bind(&update.price_unit)
        .bind(&update.address)
        .bind(update.bedrooms)
        .bind(update.bathrooms)
        .bind(&update.amenities)
        .bind(&update.images)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Owner-scoped status transition.
    pub async fn update_status(
        id: Uuid,
        user_id: Uuid,
        status: PropertyStatus,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE properties SET status = $3, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(status.to_string())
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Owner-scoped delete. Returns whether a row was removed.
    pub async fn delete(id: Uuid, user_id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Best-effort view counter bump on detail fetch.
    pub async fn increment_views(id: Uuid, pool: &PgPool) -> Result<()> {
        sqlx::query("UPDATE properties SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_round_trip() {
        for s in ["house", "apartment", "plot", "commercial", "farmhouse"] {
            let t: PropertyType = s.parse().unwrap();
            assert_eq!(t.to_string(), s);
        }
        assert!("castle".parse::<PropertyType>().is_err());
    }

    #[test]
    fn test_listing_type_round_trip() {
        for s in ["rent", "sale", "land"] {
            let t: ListingType = s.parse().unwrap();
            assert_eq!(t.to_string(), s);
        }
        assert!("lease".parse::<ListingType>().is_err());
    }

    #[test]
    fn test_status_round_trip() {
        for s in ["active", "sold", "rented", "inactive"] {
            let t: PropertyStatus = s.parse().unwrap();
            assert_eq!(t.to_string(), s);
        }
        assert!("archived".parse::<PropertyStatus>().is_err());
    }

    #[test]
    fn test_default_filter_is_unconstrained() {
        let filter = PropertyFilter::default();
        assert!(filter.city.is_none());
        assert!(filter.search.is_none());
        assert!(filter.min_price.is_none());
    }
}
