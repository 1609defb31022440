pub mod property;

pub use property::{
    ListingType, Property, PropertyFilter, PropertyStatus, PropertyType, PropertyUpdate,
};
