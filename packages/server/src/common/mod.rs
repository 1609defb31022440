//! Shared helpers used across domains.

pub mod price_format;

pub use price_format::{format_price, format_price_with_unit};
