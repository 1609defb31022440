//! Saved properties per user.

pub mod edges;
pub mod models;
