//! Buyer/renter inquiries routed to listing owners.

pub mod data;
pub mod edges;
pub mod models;
