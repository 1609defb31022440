//! GraphQL data types for the properties domain.

use chrono::{DateTime, Utc};
use juniper::{GraphQLEnum, GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use crate::common::format_price_with_unit;
use crate::domains::properties::models::{Property, PropertyStatus};

/// GraphQL type for a property listing
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A property listing")]
pub struct PropertyData {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    /// Price in PKR. i32 cannot hold Crore-scale prices, so expose as f64.
    pub price: f64,
    pub price_unit: String,
    pub display_price: String,
    pub property_type: String,
    pub listing_type: String,
    pub city: String,
    pub area: String,
    pub address: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub size_value: f64,
    pub size_unit: String,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub status: PropertyStatusData,
    pub featured: bool,
    pub verified: bool,
    pub views: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Property> for PropertyData {
    fn from(p: Property) -> Self {
        let status = p
            .status
            .parse::<PropertyStatus>()
            .unwrap_or(PropertyStatus::Inactive);
        Self {
            id: p.id,
            user_id: p.user_id,
            display_price: format_price_with_unit(p.price, &p.price_unit),
            title: p.title,
            description: p.description,
            price: p.price as f64,
            price_unit: p.price_unit,
            property_type: p.property_type,
            listing_type: p.listing_type,
            city: p.city,
            area: p.area,
            address: p.address,
            bedrooms: p.bedrooms,
            bathrooms: p.bathrooms,
            size_value: p.size_value,
            size_unit: p.size_unit,
            amenities: p.amenities,
            images: p.images,
            status: status.into(),
            featured: p.featured,
            verified: p.verified,
            views: p.views.min(i32::MAX as i64) as i32,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Property status for GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum PropertyStatusData {
    Active,
    Sold,
    Rented,
    Inactive,
}

impl From<PropertyStatus> for PropertyStatusData {
    fn from(status: PropertyStatus) -> Self {
        match status {
            PropertyStatus::Active => PropertyStatusData::Active,
            PropertyStatus::Sold => PropertyStatusData::Sold,
            PropertyStatus::Rented => PropertyStatusData::Rented,
            PropertyStatus::Inactive => PropertyStatusData::Inactive,
        }
    }
}

impl From<PropertyStatusData> for PropertyStatus {
    fn from(status: PropertyStatusData) -> Self {
        match status {
            PropertyStatusData::Active => PropertyStatus::Active,
            PropertyStatusData::Sold => PropertyStatus::Sold,
            PropertyStatusData::Rented => PropertyStatus::Rented,
            PropertyStatusData::Inactive => PropertyStatus::Inactive,
        }
    }
}

/// Paginated property results
#[derive(Debug, Clone, GraphQLObject)]
pub struct PropertyConnection {
    pub nodes: Vec<PropertyData>,
    pub total_count: i32,
    pub has_next_page: bool,
}

/// Search filters; every field is optional
#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct PropertyFilterInput {
    pub city: Option<String>,
    pub area: Option<String>,
    pub property_type: Option<String>,
    pub listing_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_bedrooms: Option<i32>,
    pub search: Option<String>,
}

/// Input for creating a listing
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreatePropertyInput {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub price_unit: Option<String>,
    pub property_type: String,
    pub listing_type: String,
    pub city: String,
    pub area: String,
    pub address: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub size_value: f64,
    pub size_unit: String,
    pub amenities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

/// Input for editing a listing; absent fields are left unchanged
#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct UpdatePropertyInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub price_unit: Option<String>,
    pub address: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}
