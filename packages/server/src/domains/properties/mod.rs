//! Property listings domain: the core marketplace inventory.

pub mod data;
pub mod edges;
pub mod models;
