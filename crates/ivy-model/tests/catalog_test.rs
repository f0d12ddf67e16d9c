use ivy_model::{Catalog, CatalogError, PlaybackMode, RhythmPattern, Step, StepType};
use tempfile::tempdir;

fn meadow_catalog() -> Catalog {
    let json = r#"{
        "patterns": [
            {
                "pattern_id": "meadow_intro",
                "display_name": "Meadow Intro",
                "bpm": 90,
                "hit_window_seconds": 0.15,
                "sequence": [
                    {"type": "Tap", "beats": 1},
                    {"type": "Rest", "beats": 1},
                    {"type": "Hold", "beats": 2}
                ]
            },
            {"pattern_id": "meadow_outro", "bpm": 70}
        ],
        "animals": [
            {
                "id": "goat",
                "display_name": "Mountain Goat",
                "patterns": ["meadow_intro", "meadow_outro"],
                "playback_mode": "Shuffle",
                "good_anim": "Nuzzle",
                "bad_anim": "Flinch",
                "reactions": ["Wave", "Cheer"],
                "loop_sfx": "goat_loop",
                "archive_reward": 5
            }
        ]
    }"#;
    Catalog::from_json(json).unwrap()
}

#[test]
fn test_catalog_from_json() {
    let catalog = meadow_catalog();

    let intro = catalog.pattern("meadow_intro").unwrap();
    assert_eq!(intro.bpm, 90);
    assert_eq!(intro.display_name, "Meadow Intro");
    assert_eq!(intro.sequence[1], Step::new(StepType::Rest, 1));

    let outro = catalog.pattern("meadow_outro").unwrap();
    assert_eq!(outro.len(), 3, "omitted sequence uses the default one");

    let goat = catalog.animal("goat").unwrap();
    assert_eq!(goat.playback_mode, PlaybackMode::Shuffle);
    assert_eq!(goat.reactions, vec!["Wave".to_string(), "Cheer".to_string()]);
    assert_eq!(goat.archive_reward, 5);
}

#[test]
fn test_catalog_file_io() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    let catalog = meadow_catalog();
    catalog.save_to(&path).unwrap();
    let loaded = Catalog::load_from(&path).unwrap();

    assert_eq!(catalog, loaded);
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nonexistent.json");

    let err = Catalog::load_from(&path).unwrap_err();
    assert!(matches!(err, CatalogError::FileRead { .. }));
}

#[test]
fn test_load_rejects_unplayable_pattern() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"{"patterns": [{"pattern_id": "silent", "sequence": []}]}"#,
    )
    .unwrap();

    let err = Catalog::load_from(&path).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidPattern { ref id, .. } if id == "silent"));
}

#[test]
fn test_resolve_preserves_order() {
    let catalog = Catalog {
        patterns: vec![RhythmPattern::new("one"), RhythmPattern::new("two")],
        ..Default::default()
    };
    let ids = vec!["two".to_string(), "one".to_string(), "two".to_string()];
    let resolved = catalog.resolve(&ids);
    let names: Vec<&str> = resolved.iter().map(|p| p.pattern_id.as_str()).collect();
    assert_eq!(names, vec!["two", "one", "two"]);
}

#[test]
fn test_bundled_catalog_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../data/meadow_catalog.json");
    let catalog = Catalog::load_from(&path).unwrap();

    let turnip = catalog.plant("turnip").unwrap();
    assert_eq!(turnip.playback_mode, PlaybackMode::Shuffle);
    assert_eq!(catalog.resolve(&turnip.patterns).len(), 3);

    let goat = catalog.animal("goat").unwrap();
    assert_eq!(catalog.resolve(&goat.patterns).len(), 2);
}
