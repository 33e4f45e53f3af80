//! Tests for loading game settings from disk

use std::path::PathBuf;

use botanic_sweeper::sweeper3d::types::{Difficulty, GameSettings};

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "botanic_sweeper_{}_{}.ron",
        name,
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let path = std::env::temp_dir().join("botanic_sweeper_does_not_exist.ron");
    assert_eq!(GameSettings::load_or_default(&path), GameSettings::default());
    assert!(GameSettings::load_from_file(&path).is_err());
}

#[test]
fn test_load_file_overrides_fields() {
    let path = temp_config(
        "overrides",
        "(difficulty: easy, show_hints: false, closed_color: (r: 0.2, g: 0.2, b: 0.2))",
    );
    let settings = GameSettings::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(settings.difficulty, Difficulty::Easy);
    assert!(!settings.show_hints);
    assert_eq!(settings.closed_color.a, 1.0);
    assert_eq!(settings.seed, None);
}

#[test]
fn test_load_broken_file_falls_back() {
    let path = temp_config("broken", "(difficulty: ");
    let settings = GameSettings::load_or_default(&path);
    std::fs::remove_file(&path).ok();

    assert_eq!(settings, GameSettings::default());
}

#[test]
fn test_example_config_parses_to_defaults() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("botanic_sweeper.example.ron");
    let settings = GameSettings::load_from_file(&path).unwrap();
    assert_eq!(settings, GameSettings::default());
}
