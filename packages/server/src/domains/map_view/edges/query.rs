use std::collections::BTreeSet;
use std::sync::Arc;

use juniper::{FieldError, FieldResult};
use sqlx::PgPool;

use crate::common::format_price_with_unit;
use crate::domains::map_view::config::MapConfig;
use crate::domains::map_view::data::{
    CoordinateData, HeatZoneData, MapViewData, PropertyMarkerData, SpotMarkerData, ZoneTypeData,
};
use crate::domains::map_view::geocode::{
    property_marker_offset, spot_marker_offset, AreaGeocoder, Coordinate, HashGeocoder,
};
use crate::domains::map_view::heat::{
    heat_color, heat_intensity, HeatError, ListingSample, SpotSample, ZoneType,
};
use crate::domains::properties::models::Property;
use crate::domains::spots::models::{Spot, SpotCategory};

/// Keeps one map query from pulling the whole city's inventory.
const MAP_PROPERTY_LIMIT: i64 = 100;

fn field_err(msg: impl Into<String>) -> FieldError {
    FieldError::new(msg.into(), juniper::Value::null())
}

/// Everything the map page needs for a city and zone type
pub async fn query_map_view(
    pool: &PgPool,
    city: String,
    zone_type: ZoneTypeData,
) -> FieldResult<MapViewData> {
    let properties = Property::find_for_map(&city, MAP_PROPERTY_LIMIT, pool)
        .await
        .map_err(|_| field_err("Database error"))?;
    let spots = Spot::find_by_city(&city, None, pool)
        .await
        .map_err(|_| field_err("Database error"))?;

    compose_map_view(&city, zone_type.into(), &properties, &spots, &MapConfig::default())
        .map_err(|e| field_err(format!("{}", e)))
}

/// Pure composition of the map payload from already-fetched rows.
pub fn compose_map_view(
    city: &str,
    zone_type: ZoneType,
    properties: &[Property],
    spots: &[Spot],
    config: &MapConfig,
) -> Result<MapViewData, HeatError> {
    let config = Arc::new(config.clone());
    let geocoder = HashGeocoder::new(Arc::clone(&config));

    let listing_samples: Vec<ListingSample> = properties
        .iter()
        .map(|p| ListingSample {
            area: p.area.clone(),
            price: p.price,
        })
        .collect();
    let spot_samples: Vec<SpotSample> = spots
        .iter()
        .map(|s| SpotSample {
            area: s.area.clone(),
            category: s.category.clone(),
        })
        .collect();

    // Unique areas across both collections, in a stable order.
    let areas: BTreeSet<&str> = properties
        .iter()
        .map(|p| p.area.as_str())
        .chain(spots.iter().map(|s| s.area.as_str()))
        .collect();

    let mut zones = Vec::with_capacity(areas.len());
    for area in areas {
        // City rows can disagree with the request when a listing was filed
        // under a different spelling; trust the row for its own anchor.
        let zone_city = properties
            .iter()
            .find(|p| p.area == area)
            .map(|p| p.city.as_str())
            .unwrap_or(city);
        let center = geocoder.resolve(zone_city, area);

        let intensity =
            heat_intensity(&listing_samples, &spot_samples, area, zone_type, &config)?;
        let color = heat_color(intensity, zone_type);

        let area_prices: Vec<i64> = properties
            .iter()
            .filter(|p| p.area == area)
            .map(|p| p.price)
            .collect();
        let average_price = if zone_type == ZoneType::Price && !area_prices.is_empty() {
            Some(area_prices.iter().sum::<i64>() as f64 / area_prices.len() as f64)
        } else {
            None
        };

        zones.push(HeatZoneData {
            area: area.to_string(),
            center: center.into(),
            intensity: intensity.value(),
            color: color.to_string(),
            radius: 30.0 + intensity.value() * 20.0,
            property_count: area_prices.len() as i32,
            average_price,
            placeholder: zone_type.is_placeholder(),
        });
    }

    let property_markers = properties
        .iter()
        .map(|p| {
            let base = geocoder.resolve(&p.city, &p.area);
            let jitter = property_marker_offset(&p.id);
            PropertyMarkerData {
                id: p.id,
                title: p.title.clone(),
                price: p.price as f64,
                display_price: format_price_with_unit(p.price, &p.price_unit),
                property_type: p.property_type.clone(),
                listing_type: p.listing_type.clone(),
                area: p.area.clone(),
                position: CoordinateData {
                    latitude: base.latitude + jitter,
                    longitude: base.longitude + jitter,
                },
            }
        })
        .collect();

    let spot_markers = spots
        .iter()
        .map(|s| {
            // Real coordinates win; derived area position otherwise.
            let base = match (s.latitude, s.longitude) {
                (Some(latitude), Some(longitude)) => Coordinate {
                    latitude,
                    longitude,
                },
                _ => {
                    let derived = geocoder.resolve(&s.city, &s.area);
                    let jitter = spot_marker_offset(&s.id);
                    Coordinate {
                        latitude: derived.latitude + jitter,
                        longitude: derived.longitude + jitter,
                    }
                }
            };
            SpotMarkerData {
                id: s.id,
                name: s.name.clone(),
                category: s.category.clone(),
                color: SpotCategory::marker_color(&s.category).to_string(),
                position: base.into(),
            }
        })
        .collect();

    Ok(MapViewData {
        city: city.to_string(),
        zone_type: zone_type.into(),
        anchor: config.anchor_for(city).into(),
        zones,
        properties: property_markers,
        spots: spot_markers,
    })
}
