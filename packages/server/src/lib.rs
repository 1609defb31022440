// Maskan - Property Marketplace API Core
//
// Backend for browsing, listing, favoriting, comparing, and inquiring about
// real-estate properties, with a map view (heat zones + markers) and an
// LLM-backed price checker. Organized domain-first; infrastructure lives
// in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
