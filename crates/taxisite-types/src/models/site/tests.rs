use serde_json::json;

use super::SiteConfig;
use crate::error::ConfigError;

#[test]
fn test_default_shape() {
    let config = SiteConfig::default();
    assert_eq!(config.stats.len(), 4);
    assert_eq!(config.vehicles.len(), 4);
    assert_eq!(config.primary_phone(), Some("+91 9999711219"));
    assert_eq!(config.vehicle("4").map(|v| v.name.as_str()), Some("Innova Crysta"));
    assert!(config.validation_report().is_clean());
}

#[test]
fn test_serializes_camel_case() {
    let value = serde_json::to_value(SiteConfig::default()).unwrap();
    assert!(value["hero"].get("imageUrl").is_some());
    assert!(value["vehicles"][0].get("fullDay").is_some());
    assert!(value.get("socialLinks").is_some());
    assert!(value.get("serviceAreas").is_some());
    assert!(value.get("secondaryPhone").is_none());
    assert_eq!(value["reviews"][0]["date"], "2023-10-15");
}

#[test]
fn test_merge_empty_object_keeps_base() {
    let base = SiteConfig::default();
    let merged = base.merged_with(&json!({})).unwrap();
    assert_eq!(merged, base);
}

#[test]
fn test_merge_replaces_arrays_wholesale() {
    let base = SiteConfig::default();
    let merged = base
        .merged_with(&json!({
            "serviceAreas": ["Sector 21"],
            "vehicles": [{
                "id": "9", "name": "Tempo Traveller", "icon": "fa-bus",
                "base": 4000, "km": 28, "hour": 400, "fullDay": 8000, "capacity": 12
            }]
        }))
        .unwrap();

    assert_eq!(merged.service_areas, vec!["Sector 21".to_string()]);
    assert_eq!(merged.vehicles.len(), 1);
    assert_eq!(merged.vehicles[0].full_day, 8000);
    assert_eq!(merged.faqs, base.faqs);
}

#[test]
fn test_merge_spreads_hero() {
    let base = SiteConfig::default();
    let merged = base.merged_with(&json!({"hero": {"title": "Night Cabs"}})).unwrap();

    assert_eq!(merged.hero.title, "Night Cabs");
    assert_eq!(merged.hero.subtitle, base.hero.subtitle);
    assert_eq!(merged.hero.image_url, base.hero.image_url);
}

#[test]
fn test_merge_ignores_unknown_keys() {
    let base = SiteConfig::default();
    let merged = base.merged_with(&json!({"theme": "dark", "address": "Sector 12"})).unwrap();
    assert_eq!(merged.address, "Sector 12");
}

#[test]
fn test_merge_skips_wrong_typed_key() {
    let base = SiteConfig::default();
    let outcome = base
        .merge_partial(&json!({"vehicles": "lots", "address": "Sector 21"}))
        .unwrap();

    assert_eq!(outcome.skipped, vec!["vehicles".to_string()]);
    assert_eq!(outcome.config.vehicles, base.vehicles);
    assert_eq!(outcome.config.address, "Sector 21");
}

#[test]
fn test_merge_keeps_siblings_of_bad_key() {
    let base = SiteConfig::default();
    let outcome = base
        .merge_partial(&json!({
            "address": "Sector 21",
            "hero": {"title": "Night Cabs"},
            "stats": [{"id": "1", "value": 5000}],
            "phones": "not a list"
        }))
        .unwrap();

    assert_eq!(outcome.config.address, "Sector 21");
    assert_eq!(outcome.config.hero.title, "Night Cabs");
    assert_eq!(outcome.config.stats, base.stats);
    assert_eq!(outcome.config.phones, base.phones);
    assert_eq!(outcome.skipped.len(), 2);
    assert!(outcome.skipped.contains(&"stats".to_string()));
    assert!(outcome.skipped.contains(&"phones".to_string()));
}

#[test]
fn test_merge_reads_cleared_numbers_as_zero() {
    let base = SiteConfig::default();
    let merged = base
        .merged_with(&json!({
            "vehicles": [{
                "id": "1", "name": "Dzire", "icon": "fa-car",
                "base": 2500, "km": null, "hour": 250, "fullDay": 3000, "capacity": 4
            }]
        }))
        .unwrap();

    assert_eq!(merged.vehicles.len(), 1);
    assert_eq!(merged.vehicles[0].km, 0);
    assert_eq!(merged.vehicles[0].base, 2500);
}

#[test]
fn test_merge_accepts_out_of_range_rating() {
    let base = SiteConfig::default();
    let mut reviews = serde_json::to_value(&base.reviews).unwrap();
    reviews[0]["rating"] = json!(-1);

    let outcome = base.merge_partial(&json!({"reviews": reviews})).unwrap();
    assert!(outcome.skipped.is_empty());
    assert_eq!(outcome.config.reviews[0].rating, -1);
    assert!(outcome.config.validation_report().mentions("rating"));
}

#[test]
fn test_merge_rejects_non_object() {
    let err = SiteConfig::default().merged_with(&json!([1, 2])).unwrap_err();
    assert_eq!(err, ConfigError::NotAnObject { found: "array".to_string() });
}

#[test]
fn test_from_partial_json_fills_missing_fields() {
    let config = SiteConfig::from_partial_json(r#"{"phones": ["011-4000"]}"#).unwrap().config;
    assert_eq!(config.phones, vec!["011-4000".to_string()]);
    assert_eq!(config.vehicles, SiteConfig::default().vehicles);
}

#[test]
fn test_secondary_phone_round_trips() {
    let config = SiteConfig::from_partial_json(r#"{"secondaryPhone": "+91 88000"}"#).unwrap().config;
    assert_eq!(config.secondary_phone.as_deref(), Some("+91 88000"));
}

#[test]
fn test_validation_reports_contact_and_rating() {
    let mut config = SiteConfig::default();
    config.phones.clear();
    config.reviews[1].rating = 9;

    let report = config.validation_report();
    assert!(report.mentions("phones"));
    assert!(report.mentions("rating"));
    assert!(!report.mentions("emails"));
}

#[test]
fn test_validation_reports_duplicate_ids() {
    let mut config = SiteConfig::default();
    config.faqs[2].id = "f1".to_string();

    let report = config.validation_report();
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].field, "faqs[2].id");
}
