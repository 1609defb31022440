//! Neighborhood points of interest ("spots"): schools, hospitals, markets,
//! transit stops shown on the map alongside listings.

pub mod data;
pub mod edges;
pub mod models;
