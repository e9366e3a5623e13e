// tests/matching_tests.rs
//
// Watch-list loading and fuzzy matching exercised together, the way the
// binary wires them at startup.

use screenwatch_core::{PhraseMatcher, WatchConfig, WatchList};
use std::io::Write;

#[test]
fn test_loaded_watch_list_matches_noisy_ocr_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("watch_list.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "Exalted Orb").unwrap();
    writeln!(file, "Divine Orb").unwrap();

    let list = WatchList::load(&path).unwrap();
    let matcher = PhraseMatcher::new(WatchConfig::default().match_cutoff);

    // One misread glyph, as Tesseract often produces.
    let noisy = vec!["EXALTED 0RB".to_string()];
    assert!(matcher.has_match(&noisy, &list));

    let unrelated = vec!["Chromatic Orb".to_string()];
    assert!(!matcher.has_match(&unrelated, &list));
}

#[test]
fn test_config_mode_resolves_through_bounds_table() {
    let mut config = WatchConfig::default();
    config.mode = "sextants".to_string();
    assert_eq!(config.bounds().lower, [102, 57, 180]);

    // Unknown modes disable color discrimination instead of failing.
    config.mode = "typo".to_string();
    assert_eq!(config.bounds().upper, [179, 255, 255]);
}
