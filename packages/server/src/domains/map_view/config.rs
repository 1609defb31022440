//! Fixed map configuration: city anchors and heat normalization constants.
//!
//! Loaded once at startup and shared immutably. Consumers needing different
//! constants (tests, future regions) inject an alternate `MapConfig` instead
//! of mutating shared tables.

use super::geocode::Coordinate;

/// Immutable configuration for coordinate derivation and heat normalization.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Known city-center anchors.
    pub city_anchors: Vec<(String, Coordinate)>,
    /// Fallback anchor for unknown cities (approximate national centroid).
    pub default_anchor: Coordinate,
    /// Price at which the price heat intensity saturates, in PKR.
    pub price_ceiling: f64,
    /// POI count at which school/transport intensity saturates.
    pub poi_saturation: f64,
    /// Intensity reported for areas with no listings, so "no data" reads
    /// differently from "confirmed cheap".
    pub no_data_price_intensity: f64,
}

impl MapConfig {
    /// Anchor for a city, falling back to the national centroid. Total:
    /// never fails for an unknown city.
    pub fn anchor_for(&self, city: &str) -> Coordinate {
        self.city_anchors
            .iter()
            .find(|(name, _)| name == city)
            .map(|(_, coord)| *coord)
            .unwrap_or(self.default_anchor)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        let anchor = |lat, lng| Coordinate {
            latitude: lat,
            longitude: lng,
        };
        Self {
            city_anchors: vec![
                ("Karachi".to_string(), anchor(24.8607, 67.0011)),
                ("Lahore".to_string(), anchor(31.5204, 74.3587)),
                ("Islamabad".to_string(), anchor(33.6844, 73.0479)),
                ("Rawalpindi".to_string(), anchor(33.5651, 73.0169)),
                ("Faisalabad".to_string(), anchor(31.4504, 73.1350)),
                ("Multan".to_string(), anchor(30.1575, 71.5249)),
                ("Peshawar".to_string(), anchor(34.0151, 71.5249)),
                ("Quetta".to_string(), anchor(30.1798, 66.9750)),
            ],
            default_anchor: anchor(30.3753, 69.3451),
            price_ceiling: 100_000_000.0,
            poi_saturation: 5.0,
            no_data_price_intensity: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_city_anchor() {
        let config = MapConfig::default();
        let lahore = config.anchor_for("Lahore");
        assert_eq!(lahore.latitude, 31.5204);
        assert_eq!(lahore.longitude, 74.3587);
    }

    #[test]
    fn test_unknown_city_falls_back_to_centroid() {
        let config = MapConfig::default();
        let anchor = config.anchor_for("UnknownVille");
        assert_eq!(anchor.latitude, 30.3753);
        assert_eq!(anchor.longitude, 69.3451);
    }

    #[test]
    fn test_eight_known_cities() {
        assert_eq!(MapConfig::default().city_anchors.len(), 8);
    }
}
