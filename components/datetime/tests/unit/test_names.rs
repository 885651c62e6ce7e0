//! Unit tests for name tables and the locale registry

use datetime::{LocaleRegistry, NameTable, NameTableError};
use std::io::Write;

const GERMAN: &str = r#"{
    "dayNames": ["Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag"],
    "abbreviatedDayNames": ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    "monthNames": ["Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September", "Oktober", "November", "Dezember"],
    "abbreviatedMonthNames": ["Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez"]
}"#;

#[test]
fn test_from_words_matches_builtin() {
    let table = NameTable::from_words(
        "Sunday Monday Tuesday Wednesday Thursday Friday Saturday",
        "Sun Mon Tue Wed Thu Fri Sat",
        "January February March April May June July August September October November December",
        "Jan Feb Mar Apr May Jun Jul Aug Sep Oct Nov Dec",
    )
    .unwrap();
    assert_eq!(table, NameTable::english());
}

#[test]
fn test_table_from_json() {
    let table = NameTable::from_json(GERMAN).unwrap();
    assert_eq!(table.day_name(3), "Mittwoch");
    assert_eq!(table.month_name(3), "März");
}

#[test]
fn test_json_with_wrong_length_is_rejected() {
    let json = r#"{
        "dayNames": ["a"],
        "abbreviatedDayNames": ["a"],
        "monthNames": ["a"],
        "abbreviatedMonthNames": ["a"]
    }"#;
    assert!(matches!(
        NameTable::from_json(json),
        Err(NameTableError::Json(_))
    ));
}

#[test]
fn test_json_round_trip_through_serialize() {
    let json = serde_json::to_string(&NameTable::french()).unwrap();
    assert!(json.contains("\"abbreviatedMonthNames\""));
    assert_eq!(NameTable::from_json(&json).unwrap(), NameTable::french());
}

#[test]
fn test_registry_builtin_locales() {
    let registry = LocaleRegistry::with_builtin();
    let locales: Vec<&str> = registry.locales().collect();
    assert_eq!(locales, vec!["English", "French"]);
    assert_eq!(registry.get("English").unwrap(), &NameTable::english());
}

#[test]
fn test_registry_register_replaces() {
    let mut registry = LocaleRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.register("en", NameTable::french()).is_none());
    let previous = registry.register("en", NameTable::english());
    assert_eq!(previous, Some(NameTable::french()));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_registry_load_json() {
    let mut registry = LocaleRegistry::with_builtin();
    let loaded = registry
        .load_json(&format!(r#"{{"German": {}}}"#, GERMAN))
        .unwrap();
    assert_eq!(loaded, 1);
    assert_eq!(registry.get("German").unwrap().abbreviated_day_name(0), "So");
}

#[test]
fn test_registry_load_json_is_all_or_nothing() {
    let mut registry = LocaleRegistry::new();
    let json = format!(r#"{{"German": {}, "Broken": {{"dayNames": []}}}}"#, GERMAN);
    assert!(registry.load_json(&json).is_err());
    assert!(registry.is_empty());
}

#[test]
fn test_registry_load_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"German": {}}}"#, GERMAN).unwrap();

    let mut registry = LocaleRegistry::new();
    assert_eq!(registry.load_file(file.path()).unwrap(), 1);
    assert!(registry.get("German").is_ok());
}

#[test]
fn test_registry_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = LocaleRegistry::new();
    assert!(matches!(
        registry.load_file(dir.path().join("missing.json")),
        Err(NameTableError::Io(_))
    ));
}
