// tests/settings.rs
use std::fs;

use studygo_scrape::{
    config::{
        settings::{Settings, SettingsStore, Theme},
        state::AppState,
    },
    csv::Delimiter,
};

#[test]
fn defaults_to_tab_without_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::at(dir.path().join("settings.json"));
    let s = store.load().unwrap();
    assert_eq!(s.default_copy_format, Delimiter::Tab);
    assert_eq!(s.theme, Theme::Light);
}

#[test]
fn round_trips_once_saved() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::at(dir.path().join("nested").join("settings.json"));
    let s = Settings { default_copy_format: Delimiter::Equals, theme: Theme::Dark };
    store.save(&s).unwrap();
    assert_eq!(store.load().unwrap(), s);

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("\"defaultCopyFormat\": \"equals\""), "{raw}");
    assert!(raw.contains("\"theme\": \"dark\""), "{raw}");
}

#[test]
fn partial_record_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"defaultCopyFormat":"comma"}"#).unwrap();
    let s = SettingsStore::at(&path).load().unwrap();
    assert_eq!(s.default_copy_format, Delimiter::Comma);
    assert_eq!(s.theme, Theme::Light);
}

#[test]
fn broken_record_degrades_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "[]").unwrap();
    let store = SettingsStore::at(&path);
    assert!(store.load().is_err());
    assert_eq!(store.load_or_default(), Settings::default());
}

#[test]
fn saved_default_seeds_the_export_delimiter() {
    let s = Settings { default_copy_format: Delimiter::Comma, ..Settings::default() };
    let state = AppState::from_settings(s);
    assert_eq!(state.options.export.delimiter, Delimiter::Comma);
    assert!(state.options.export.file_name().ends_with(".csv"));
}

#[test]
fn unknown_stored_delimiter_becomes_comma_and_keeps_theme() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"defaultCopyFormat":"semicolon","theme":"dark"}"#).unwrap();
    let s = SettingsStore::at(&path).load().unwrap();
    assert_eq!(s.default_copy_format, Delimiter::Comma);
    assert_eq!(s.theme, Theme::Dark);
}
