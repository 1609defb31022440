//! GraphQL data types for spots.

use juniper::GraphQLObject;
use uuid::Uuid;

use crate::domains::spots::models::Spot;

/// GraphQL type for a point of interest
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A neighborhood point of interest")]
pub struct SpotData {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub city: String,
    pub area: String,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<Spot> for SpotData {
    fn from(s: Spot) -> Self {
        Self {
            id: s.id,
            name: s.name,
            category: s.category,
            subcategory: s.subcategory,
            city: s.city,
            area: s.area,
            address: s.address,
            latitude: s.latitude,
            longitude: s.longitude,
        }
    }
}
