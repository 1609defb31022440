pub mod spot;

pub use spot::{Spot, SpotCategory};
