//! Heat zone intensity estimation and color mapping.
//!
//! Intensity is a clamped [0,1] concentration score per (area, zone type).
//! Price, schools, and transport derive from real listing/POI data; safety,
//! noise, and flood have no data source yet and derive deterministic
//! placeholder values from the area-name hash. Placeholder zones carry a
//! flag all the way to the API so the UI never presents them as measured.

use thiserror::Error;

use super::config::MapConfig;
use super::geocode::area_hash;

/// The dimension visualized on the heat overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneType {
    Price,
    Schools,
    Transport,
    Safety,
    Noise,
    Flood,
}

impl ZoneType {
    /// Safety, noise, and flood have no backing data yet; their values are
    /// deterministic placeholders, not measurements.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ZoneType::Safety | ZoneType::Noise | ZoneType::Flood)
    }
}

impl std::fmt::Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneType::Price => write!(f, "price"),
            ZoneType::Schools => write!(f, "schools"),
            ZoneType::Transport => write!(f, "transport"),
            ZoneType::Safety => write!(f, "safety"),
            ZoneType::Noise => write!(f, "noise"),
            ZoneType::Flood => write!(f, "flood"),
        }
    }
}

#[derive(Debug, Error)]
pub enum HeatError {
    /// Precondition violation: a non-finite value reached the intensity
    /// computation. Reported instead of letting NaN flow into color lookup.
    #[error("non-finite intensity computed: {0}")]
    NonFinite(f64),
}

/// A concentration score clamped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Intensity(f64);

impl Intensity {
    /// Clamps finite values into [0, 1]; rejects NaN and infinities.
    pub fn new(value: f64) -> Result<Self, HeatError> {
        if !value.is_finite() {
            return Err(HeatError::NonFinite(value));
        }
        Ok(Self(value.clamp(0.0, 1.0)))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// The subset of a listing the estimator needs.
#[derive(Debug, Clone)]
pub struct ListingSample {
    pub area: String,
    pub price: i64,
}

/// The subset of a point of interest the estimator needs.
#[derive(Debug, Clone)]
pub struct SpotSample {
    pub area: String,
    pub category: String,
}

/// Compute the heat intensity for an area and zone type.
///
/// Pure and total: unknown areas hit the zero-match defaults or the
/// hash-derived placeholder branches. Area matching is exact.
pub fn heat_intensity(
    listings: &[ListingSample],
    spots: &[SpotSample],
    area: &str,
    zone_type: ZoneType,
    config: &MapConfig,
) -> Result<Intensity, HeatError> {
    let area_listings: Vec<&ListingSample> =
        listings.iter().filter(|l| l.area == area).collect();
    let area_spots: Vec<&SpotSample> = spots.iter().filter(|s| s.area == area).collect();

    // Deterministic stand-in for the zone types with no data source yet.
    let mock_value = (area_hash(area) % 100) as f64 / 100.0;

    let raw = match zone_type {
        ZoneType::Price => {
            if area_listings.is_empty() {
                config.no_data_price_intensity
            } else {
                let total: i64 = area_listings.iter().map(|l| l.price).sum();
                let avg = total as f64 / area_listings.len() as f64;
                avg / config.price_ceiling
            }
        }
        ZoneType::Schools => {
            let schools = area_spots
                .iter()
                .filter(|s| s.category == "education")
                .count();
            schools as f64 / config.poi_saturation
        }
        ZoneType::Transport => {
            let stops = area_spots
                .iter()
                .filter(|s| s.category == "transport")
                .count();
            stops as f64 / config.poi_saturation
        }
        // Placeholder: inverted and compressed, most areas read as safe.
        ZoneType::Safety => 1.0 - mock_value * 0.6,
        // Placeholder: scaled toward quiet.
        ZoneType::Noise => mock_value * 0.7,
        // Placeholder: scaled toward low risk.
        ZoneType::Flood => mock_value * 0.5,
    };

    Intensity::new(raw)
}

// Five discrete levels per zone type, low to high. Hue direction differs
// per zone: price/noise run toward red, transport/safety toward green,
// flood toward cyan.
const PRICE_PALETTE: [&str; 5] = ["#22c55e", "#84cc16", "#eab308", "#f97316", "#ef4444"];
const SCHOOLS_PALETTE: [&str; 5] = ["#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b"];
const TRANSPORT_PALETTE: [&str; 5] = ["#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e"];
const SAFETY_PALETTE: [&str; 5] = ["#ef4444", "#f97316", "#eab308", "#84cc16", "#22c55e"];
const NOISE_PALETTE: [&str; 5] = ["#3b82f6", "#60a5fa", "#93c5fd", "#f97316", "#ef4444"];
const FLOOD_PALETTE: [&str; 5] = ["#22c55e", "#84cc16", "#eab308", "#06b6d4", "#0891b2"];

fn palette(zone_type: ZoneType) -> &'static [&'static str; 5] {
    match zone_type {
        ZoneType::Price => &PRICE_PALETTE,
        ZoneType::Schools => &SCHOOLS_PALETTE,
        ZoneType::Transport => &TRANSPORT_PALETTE,
        ZoneType::Safety => &SAFETY_PALETTE,
        ZoneType::Noise => &NOISE_PALETTE,
        ZoneType::Flood => &FLOOD_PALETTE,
    }
}

/// Map an intensity to one of five discrete colors for the zone type.
///
/// Discrete on purpose - a stepped legend stays legible where a continuous
/// gradient would not.
pub fn heat_color(intensity: Intensity, zone_type: ZoneType) -> &'static str {
    let index = ((intensity.value() * 4.0).floor() as usize).min(4);
    palette(zone_type)[index]
}
