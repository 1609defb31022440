//! Tests for the map view composition: heat zones, markers, and the
//! geocoding that positions them.

use chrono::Utc;
use server_core::domains::map_view::config::MapConfig;
use server_core::domains::map_view::data::ZoneTypeData;
use server_core::domains::map_view::edges::compose_map_view;
use server_core::domains::map_view::geocode::{AreaGeocoder, HashGeocoder};
use server_core::domains::map_view::heat::ZoneType;
use server_core::domains::properties::models::Property;
use server_core::domains::spots::models::Spot;
use std::sync::Arc;
use uuid::Uuid;

fn property(city: &str, area: &str, price: i64) -> Property {
    Property {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        title: format!("{} listing", area),
        description: "A test listing".to_string(),
        price,
        price_unit: "total".to_string(),
        property_type: "house".to_string(),
        listing_type: "sale".to_string(),
        city: city.to_string(),
        area: area.to_string(),
        address: None,
        bedrooms: Some(3),
        bathrooms: Some(2),
        size_value: 10.0,
        size_unit: "marla".to_string(),
        amenities: vec![],
        images: vec![],
        status: "active".to_string(),
        featured: false,
        verified: false,
        views: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn spot(city: &str, area: &str, category: &str) -> Spot {
    Spot {
        id: Uuid::new_v4(),
        name: format!("{} {}", area, category),
        category: category.to_string(),
        subcategory: None,
        city: city.to_string(),
        area: area.to_string(),
        address: None,
        latitude: None,
        longitude: None,
        created_at: Utc::now(),
    }
}

#[test]
fn one_zone_per_unique_area_across_both_collections() {
    let properties = vec![
        property("Lahore", "Gulberg", 20_000_000),
        property("Lahore", "Gulberg", 30_000_000),
        property("Lahore", "Johar Town", 15_000_000),
    ];
    let spots = vec![
        spot("Lahore", "Gulberg", "education"),
        spot("Lahore", "Model Town", "transport"),
    ];

    let view = compose_map_view(
        "Lahore",
        ZoneType::Price,
        &properties,
        &spots,
        &MapConfig::default(),
    )
    .unwrap();

    let mut areas: Vec<&str> = view.zones.iter().map(|z| z.area.as_str()).collect();
    areas.sort();
    assert_eq!(areas, vec!["Gulberg", "Johar Town", "Model Town"]);
}

#[test]
fn price_zone_carries_average_price_and_count() {
    let properties = vec![
        property("Lahore", "Gulberg", 20_000_000),
        property("Lahore", "Gulberg", 40_000_000),
    ];

    let view = compose_map_view(
        "Lahore",
        ZoneType::Price,
        &properties,
        &[],
        &MapConfig::default(),
    )
    .unwrap();

    let zone = view.zones.iter().find(|z| z.area == "Gulberg").unwrap();
    assert_eq!(zone.property_count, 2);
    assert_eq!(zone.average_price, Some(30_000_000.0));
    assert!(!zone.placeholder);
    // 30M mean against a 100M ceiling
    assert!((zone.intensity - 0.3).abs() < 1e-9);
}

#[test]
fn spot_only_area_has_no_average_price() {
    let spots = vec![spot("Lahore", "Model Town", "education")];

    let view = compose_map_view(
        "Lahore",
        ZoneType::Price,
        &[],
        &spots,
        &MapConfig::default(),
    )
    .unwrap();

    let zone = &view.zones[0];
    assert_eq!(zone.property_count, 0);
    assert_eq!(zone.average_price, None);
    // No listings reads as the low-data default, not zero.
    assert!((zone.intensity - 0.2).abs() < 1e-9);
}

#[test]
fn non_price_zone_never_reports_average_price() {
    let properties = vec![property("Lahore", "Gulberg", 20_000_000)];

    let view = compose_map_view(
        "Lahore",
        ZoneType::Schools,
        &properties,
        &[],
        &MapConfig::default(),
    )
    .unwrap();

    assert_eq!(view.zones[0].average_price, None);
}

#[test]
fn placeholder_zone_types_are_flagged() {
    let properties = vec![property("Karachi", "Clifton", 50_000_000)];

    for zone_type in [ZoneType::Safety, ZoneType::Noise, ZoneType::Flood] {
        let view = compose_map_view(
            "Karachi",
            zone_type,
            &properties,
            &[],
            &MapConfig::default(),
        )
        .unwrap();
        assert!(view.zones[0].placeholder, "{:?} should be flagged", zone_type);
    }
}

#[test]
fn zone_radius_scales_with_intensity() {
    let properties = vec![property("Lahore", "Gulberg", 100_000_000)];

    let view = compose_map_view(
        "Lahore",
        ZoneType::Price,
        &properties,
        &[],
        &MapConfig::default(),
    )
    .unwrap();

    // Intensity 1.0 gives the maximum radius.
    assert_eq!(view.zones[0].radius, 50.0);
}

#[test]
fn property_markers_jitter_around_area_coordinate() {
    let config = MapConfig::default();
    let geocoder = HashGeocoder::new(Arc::new(config.clone()));
    let properties = vec![
        property("Lahore", "Gulberg", 20_000_000),
        property("Lahore", "Gulberg", 25_000_000),
    ];

    let view = compose_map_view("Lahore", ZoneType::Price, &properties, &[], &config).unwrap();

    let base = geocoder.resolve("Lahore", "Gulberg");
    for marker in &view.properties {
        assert!((marker.position.latitude - base.latitude).abs() <= 0.01);
        assert!((marker.position.longitude - base.longitude).abs() <= 0.01);
    }
}

#[test]
fn spot_with_real_coordinates_keeps_them() {
    let mut s = spot("Islamabad", "F-7", "healthcare");
    s.latitude = Some(33.7);
    s.longitude = Some(73.05);

    let view = compose_map_view(
        "Islamabad",
        ZoneType::Transport,
        &[],
        &[s],
        &MapConfig::default(),
    )
    .unwrap();

    let marker = &view.spots[0];
    assert_eq!(marker.position.latitude, 33.7);
    assert_eq!(marker.position.longitude, 73.05);
    assert_eq!(marker.color, "#ef4444");
}

#[test]
fn anchor_follows_requested_city() {
    let view = compose_map_view(
        "Karachi",
        ZoneType::Price,
        &[],
        &[],
        &MapConfig::default(),
    )
    .unwrap();
    assert_eq!(view.anchor.latitude, 24.8607);
    assert_eq!(view.anchor.longitude, 67.0011);
    assert!(view.zones.is_empty());
    assert_eq!(view.zone_type, ZoneTypeData::Price);
}

#[test]
fn composition_is_deterministic() {
    let properties = vec![
        property("Lahore", "Gulberg", 20_000_000),
        property("Lahore", "Johar Town", 35_000_000),
    ];
    let spots = vec![spot("Lahore", "Gulberg", "transport")];
    let config = MapConfig::default();

    let a = compose_map_view("Lahore", ZoneType::Transport, &properties, &spots, &config).unwrap();
    let b = compose_map_view("Lahore", ZoneType::Transport, &properties, &spots, &config).unwrap();

    assert_eq!(a.zones.len(), b.zones.len());
    for (za, zb) in a.zones.iter().zip(b.zones.iter()) {
        assert_eq!(za.area, zb.area);
        assert_eq!(za.intensity, zb.intensity);
        assert_eq!(za.color, zb.color);
        assert_eq!(za.center.latitude, zb.center.latitude);
        assert_eq!(za.center.longitude, zb.center.longitude);
    }
}
