// Domain modules. Each domain owns its models (sqlx), data (GraphQL types),
// and edges (resolver functions); pure domains skip the layers they don't
// need.
pub mod comparison;
pub mod favorites;
pub mod inquiries;
pub mod map_view;
pub mod pricing;
pub mod profiles;
pub mod properties;
pub mod spots;
