//! GraphQL types for the map page.

use juniper::{GraphQLEnum, GraphQLObject};
use uuid::Uuid;

use super::geocode::Coordinate;
use super::heat::ZoneType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum ZoneTypeData {
    Price,
    Schools,
    Transport,
    Safety,
    Noise,
    Flood,
}

impl From<ZoneType> for ZoneTypeData {
    fn from(z: ZoneType) -> Self {
        match z {
            ZoneType::Price => Self::Price,
            ZoneType::Schools => Self::Schools,
            ZoneType::Transport => Self::Transport,
            ZoneType::Safety => Self::Safety,
            ZoneType::Noise => Self::Noise,
            ZoneType::Flood => Self::Flood,
        }
    }
}

impl From<ZoneTypeData> for ZoneType {
    fn from(z: ZoneTypeData) -> Self {
        match z {
            ZoneTypeData::Price => Self::Price,
            ZoneTypeData::Schools => Self::Schools,
            ZoneTypeData::Transport => Self::Transport,
            ZoneTypeData::Safety => Self::Safety,
            ZoneTypeData::Noise => Self::Noise,
            ZoneTypeData::Flood => Self::Flood,
        }
    }
}

#[derive(Debug, Clone, Copy, GraphQLObject)]
pub struct CoordinateData {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinate> for CoordinateData {
    fn from(c: Coordinate) -> Self {
        Self {
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

/// One heat circle on the overlay.
///
/// `placeholder` marks zone types with no real data source behind them so
/// the UI can label them as estimates.
#[derive(Debug, Clone, GraphQLObject)]
pub struct HeatZoneData {
    pub area: String,
    pub center: CoordinateData,
    pub intensity: f64,
    pub color: String,
    /// Visual radius in pixels, scaled with intensity.
    pub radius: f64,
    pub property_count: i32,
    /// Mean asking price in PKR; only set for the price zone type when the
    /// area has listings.
    pub average_price: Option<f64>,
    pub placeholder: bool,
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct PropertyMarkerData {
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub display_price: String,
    pub property_type: String,
    pub listing_type: String,
    pub area: String,
    pub position: CoordinateData,
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct SpotMarkerData {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub color: String,
    pub position: CoordinateData,
}

/// Everything the map page renders in one query.
#[derive(Debug, Clone, GraphQLObject)]
pub struct MapViewData {
    pub city: String,
    pub zone_type: ZoneTypeData,
    pub anchor: CoordinateData,
    pub zones: Vec<HeatZoneData>,
    pub properties: Vec<PropertyMarkerData>,
    pub spots: Vec<SpotMarkerData>,
}
