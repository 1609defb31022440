//! Public-facing user profiles. Identity lives upstream; this domain only
//! stores the display details the marketplace needs.

pub mod edges;
pub mod models;
