//! Integration scenarios for per-program analytics preferences backed by the
//! JSON file store: defaults, persistence across store instances, corruption
//! recovery and catalog validation.

use std::fs;
use std::sync::Arc;

use serde_json::{json, Value};
use starsyn::analytics::{
    display_order, CatalogSelection, FilePreferenceStore, MetricCategory, PreferenceError,
    PreferenceKind, PreferenceStore, ProgramPreferences, DEFAULT_CHARTS, DEFAULT_HEATMAPS,
    DEFAULT_METRICS, METRICS,
};

fn preferences_at(path: &std::path::Path) -> ProgramPreferences<FilePreferenceStore> {
    ProgramPreferences::new(Arc::new(FilePreferenceStore::new(path)))
}

fn strings(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|key| key.to_string()).collect()
}

#[test]
fn missing_file_yields_catalog_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let preferences = preferences_at(&dir.path().join("prefs.json"));

    let selections = preferences.load_all("cs-101");
    assert_eq!(selections.program_id, "cs-101");
    assert_eq!(selections.metrics, strings(&DEFAULT_METRICS));
    assert_eq!(selections.charts, strings(&DEFAULT_CHARTS));
    assert_eq!(selections.heatmaps, strings(&DEFAULT_HEATMAPS));
}

#[test]
fn saved_selections_survive_a_new_store_and_stay_per_program() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("prefs.json");

    let first = preferences_at(&path);
    first
        .save(
            PreferenceKind::Charts,
            "cs-101",
            &strings(&["enrollment_forecast", "intent_activity"]),
        )
        .expect("charts saved");
    first
        .save(PreferenceKind::Heatmaps, "cyber-200", &[])
        .expect("empty heatmaps saved");

    let reopened = preferences_at(&path);
    assert_eq!(
        reopened.load(PreferenceKind::Charts, "cs-101"),
        strings(&["enrollment_forecast", "intent_activity"])
    );
    assert_eq!(
        reopened.load(PreferenceKind::Charts, "cyber-200"),
        strings(&DEFAULT_CHARTS)
    );
    assert!(reopened
        .load(PreferenceKind::Heatmaps, "cyber-200")
        .is_empty());

    let raw: Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("file written")).expect("json");
    assert_eq!(
        raw["program_analytics_charts_cs-101"],
        json!(["enrollment_forecast", "intent_activity"])
    );
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn corrupt_file_reads_as_defaults_and_is_replaced_on_save() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("prefs.json");
    fs::write(&path, "{ not json").expect("seed corrupt file");

    let preferences = preferences_at(&path);
    assert_eq!(
        preferences.load(PreferenceKind::Metrics, "cs-101"),
        strings(&DEFAULT_METRICS)
    );

    preferences
        .save(PreferenceKind::Metrics, "cs-101", &strings(&["impression_rate"]))
        .expect("save replaces the corrupt file");
    assert_eq!(
        preferences.load(PreferenceKind::Metrics, "cs-101"),
        strings(&["impression_rate"])
    );
}

#[test]
fn stored_value_of_the_wrong_shape_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("prefs.json");
    let store = FilePreferenceStore::new(&path);
    store
        .set("program_metrics_cs-101", json!({ "unexpected": true }))
        .expect("raw value stored");

    let preferences = ProgramPreferences::new(Arc::new(store));
    assert_eq!(
        preferences.load(PreferenceKind::Metrics, "cs-101"),
        strings(&DEFAULT_METRICS)
    );
}

#[test]
fn unknown_keys_are_rejected_without_touching_the_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("prefs.json");
    let preferences = preferences_at(&path);

    let err = preferences
        .save(
            PreferenceKind::Heatmaps,
            "cs-101",
            &strings(&["intent_capability", "bounce_rate"]),
        )
        .expect_err("bounce_rate is not a heatmap");

    assert!(matches!(
        err,
        PreferenceError::UnknownKey {
            kind: PreferenceKind::Heatmaps,
            ref key,
        } if key == "bounce_rate"
    ));
    assert!(!path.exists());
}

#[test]
fn category_bulk_selection_round_trips_through_the_store() {
    let dir = tempfile::tempdir().expect("temp dir");
    let preferences = preferences_at(&dir.path().join("prefs.json"));

    let mut selection =
        CatalogSelection::new(preferences.load(PreferenceKind::Metrics, "ds-300"));
    let category = MetricCategory::General.key();
    selection.select_category(METRICS, category);
    assert!(selection.category_state(METRICS, category).all_selected);

    preferences
        .save(PreferenceKind::Metrics, "ds-300", selection.keys())
        .expect("metrics saved");

    let reloaded = CatalogSelection::new(preferences.load(PreferenceKind::Metrics, "ds-300"));
    assert_eq!(reloaded, selection);
    assert_eq!(reloaded.keys().len(), DEFAULT_METRICS.len() + 2);
    assert_eq!(
        &reloaded.keys()[..DEFAULT_METRICS.len()],
        &strings(&DEFAULT_METRICS)[..]
    );
}

#[test]
fn heatmap_display_order_follows_the_saved_list_with_the_map_last() {
    let dir = tempfile::tempdir().expect("temp dir");
    let preferences = preferences_at(&dir.path().join("prefs.json"));

    let defaults = preferences.load(PreferenceKind::Heatmaps, "cs-101");
    let ordered: Vec<&str> = display_order(&defaults)
        .iter()
        .map(|definition| definition.key)
        .collect();
    assert_eq!(
        ordered,
        vec!["intent_capability", "conversion_stage", "geographic_distribution"]
    );
}
