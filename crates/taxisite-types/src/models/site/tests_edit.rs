use std::collections::HashSet;

use super::{GeneralPatch, ReviewPatch, SiteConfig, VehiclePatch};
use crate::error::ConfigError;

fn sample_vehicle(config: &SiteConfig) -> super::Vehicle {
    let mut vehicle = config.vehicles[0].clone();
    vehicle.name = "Tempo Traveller".to_string();
    vehicle
}

#[test]
fn test_remove_review_keeps_order() {
    let mut config = SiteConfig::default();
    config.add_default_review();
    let ids: Vec<String> = config.reviews.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids.len(), 3);

    let removed = config.remove_review("r2").unwrap();

    assert_eq!(removed.name, "Priya Sharma");
    let remaining: Vec<&str> = config.reviews.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(remaining, vec![ids[0].as_str(), ids[2].as_str()]);
}

#[test]
fn test_remove_missing_review_is_error() {
    let mut config = SiteConfig::default();
    let err = config.remove_review("nope").unwrap_err();
    assert_eq!(err, ConfigError::entry_not_found("reviews", "nope"));
    assert_eq!(config.reviews.len(), 2);
}

#[test]
fn test_added_vehicles_get_distinct_ids() {
    let mut config = SiteConfig::default();
    let first = sample_vehicle(&config);
    let second = sample_vehicle(&config);
    config.add_vehicle(first);
    config.add_vehicle(second);

    let ids: HashSet<&str> = config.vehicles.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids.len(), config.vehicles.len());
}

#[test]
fn test_add_vehicle_replaces_input_id() {
    let mut config = SiteConfig::default();
    let vehicle = sample_vehicle(&config);
    let added_id = config.add_vehicle(vehicle).id.clone();
    assert_ne!(added_id, "1");
}

#[test]
fn test_update_vehicle_prices() {
    let mut config = SiteConfig::default();
    let patch = VehiclePatch { base: Some(1400), full_day: Some(3200), ..Default::default() };
    let updated = config.update_vehicle("1", patch).unwrap();

    assert_eq!(updated.base, 1400);
    assert_eq!(updated.full_day, 3200);
    assert_eq!(updated.km, 12);
}

#[test]
fn test_default_review_placeholder() {
    let mut config = SiteConfig::default();
    let review = config.add_default_review().clone();
    assert_eq!(review.name, "New Client");
    assert_eq!(review.rating, 5);
    assert_eq!(review.date.to_string(), "2024-01-01");

    let patch = ReviewPatch { rating: Some(3), ..Default::default() };
    assert_eq!(config.update_review(&review.id, patch).unwrap().rating, 3);
}

#[test]
fn test_gallery_add_and_remove() {
    let mut config = SiteConfig::default();
    let added = config.add_gallery_images(vec!["data:image/png;base64,AAAA".to_string()]);
    assert_eq!(added, 1);
    assert_eq!(config.gallery.len(), 5);

    let removed = config.remove_gallery_image(4).unwrap();
    assert!(removed.starts_with("data:image/png"));

    let err = config.remove_gallery_image(10).unwrap_err();
    assert_eq!(err, ConfigError::GalleryIndexOutOfRange { index: 10, len: 4 });
}

#[test]
fn test_faq_and_stat_lifecycle() {
    let mut config = SiteConfig::default();
    let faq_id = config.add_faq("Airport pickups?", "Yes, all terminals.").id.clone();
    let stat_id = config.add_stat("50k", "Kilometres").id.clone();

    assert_eq!(config.faqs.len(), 4);
    config.remove_faq(&faq_id).unwrap();
    config.remove_stat(&stat_id).unwrap();
    assert_eq!(config.faqs.len(), 3);
    assert_eq!(config.stats.len(), 4);
}

#[test]
fn test_general_patch_only_touches_given_fields() {
    let mut config = SiteConfig::default();
    config.apply_general(GeneralPatch {
        emails: Some(vec!["bookings@example.com".to_string()]),
        secondary_phone: Some("  ".to_string()),
        ..Default::default()
    });

    assert_eq!(config.primary_email(), Some("bookings@example.com"));
    assert_eq!(config.secondary_phone, None);
    assert_eq!(config.phones, SiteConfig::default().phones);
}
