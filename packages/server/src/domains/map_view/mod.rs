//! Map discovery domain.
//!
//! Pure, synchronous derivation pipeline behind the map page: stable
//! pseudo-coordinates for (city, area) pairs, [0,1] heat intensities per
//! zone type, and the discrete heat palette. The GraphQL edge composes
//! these over the property/spot collections fetched for a city.

pub mod config;
pub mod data;
pub mod edges;
pub mod geocode;
pub mod heat;

pub use config::MapConfig;
pub use geocode::{AreaGeocoder, Coordinate, HashGeocoder};
pub use heat::{heat_color, heat_intensity, HeatError, Intensity, ListingSample, SpotSample, ZoneType};
