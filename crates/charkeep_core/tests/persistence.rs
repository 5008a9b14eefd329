use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use charkeep_core::{Character, CharacterClass, CoreErrorCode, repository};

fn temp_path(prefix: &str, extension: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "{prefix}_{}_{nanos}.{extension}",
        std::process::id()
    ))
}

fn sample_roster() -> Vec<Character> {
    vec![
        Character {
            name: "Aria".to_string(),
            level: 5,
            health: 120,
            mana: 40,
            abilities: vec!["Slash".to_string(), "Slash".to_string()],
            weapon_type: "Sword".to_string(),
            class: CharacterClass::Warrior,
            armor_type: "Heavy".to_string(),
        },
        Character {
            name: "Borin".to_string(),
            level: 12,
            health: 300,
            mana: 0,
            abilities: Vec::new(),
            weapon_type: "Hammer".to_string(),
            class: CharacterClass::Priest,
            armor_type: "Magic".to_string(),
        },
    ]
}

#[test]
fn json_round_trip_preserves_every_field() {
    let path = temp_path("charkeep_json_roundtrip", "json");
    let roster = sample_roster();

    repository::save_json(&path, &roster).expect("save JSON");
    let loaded = repository::load_json(&path).expect("load JSON");
    fs::remove_file(&path).ok();

    assert_eq!(loaded, roster);
}

#[test]
fn xml_round_trip_preserves_every_field() {
    let path = temp_path("charkeep_xml_roundtrip", "xml");
    let roster = sample_roster();

    repository::save_xml(&path, &roster).expect("save XML");
    let loaded = repository::load_xml(&path).expect("load XML");
    fs::remove_file(&path).ok();

    assert_eq!(loaded, roster);
}

#[test]
fn json_output_is_pretty_printed_with_spec_field_names() {
    let path = temp_path("charkeep_json_shape", "json");
    repository::save_json(&path, &sample_roster()).expect("save JSON");
    let text = fs::read_to_string(&path).expect("file written");
    fs::remove_file(&path).ok();

    assert!(text.starts_with('['));
    assert!(text.contains('\n'));
    for key in [
        "\"Name\"",
        "\"Level\"",
        "\"Health\"",
        "\"Mana\"",
        "\"Abilities\"",
        "\"WeaponType\"",
        "\"CharacterClass\"",
        "\"ArmorType\"",
    ] {
        assert!(text.contains(key), "missing {key} in:\n{text}");
    }
}

#[test]
fn xml_output_uses_the_documented_shape() {
    let path = temp_path("charkeep_xml_shape", "xml");
    repository::save_xml(&path, &sample_roster()).expect("save XML");
    let text = fs::read_to_string(&path).expect("file written");
    fs::remove_file(&path).ok();

    assert!(text.starts_with("<?xml"));
    assert!(text.contains("<ArrayOfCharacter"));
    assert!(text.contains("<Character>"));
    assert!(text.contains("<Abilities>"));
    assert!(text.contains("<Ability>Slash</Ability>"));
    assert!(text.contains("<CharacterClass>Warrior</CharacterClass>"));
}

#[test]
fn loading_a_missing_file_yields_an_empty_roster() {
    let path = temp_path("charkeep_missing", "json");
    assert_eq!(repository::load_json(&path).expect("missing JSON"), vec![]);

    let path = temp_path("charkeep_missing", "xml");
    assert_eq!(repository::load_xml(&path).expect("missing XML"), vec![]);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let path = temp_path("charkeep_bad", "json");
    fs::write(&path, "{not json").expect("write fixture");
    let err = repository::load_json(&path).expect_err("malformed JSON");
    fs::remove_file(&path).ok();
    assert_eq!(err.code, CoreErrorCode::Parse);
}

#[test]
fn malformed_xml_is_a_parse_error() {
    let path = temp_path("charkeep_bad", "xml");
    fs::write(&path, "<ArrayOfCharacter><Character>").expect("write fixture");
    let err = repository::load_xml(&path).expect_err("malformed XML");
    fs::remove_file(&path).ok();
    assert_eq!(err.code, CoreErrorCode::Parse);
}

#[test]
fn incompatible_json_shape_is_a_parse_error() {
    let path = temp_path("charkeep_wrong_shape", "json");
    fs::write(&path, r#"{"Version": 2, "Records": []}"#).expect("write fixture");
    let err = repository::load_json(&path).expect_err("object is not an array");
    fs::remove_file(&path).ok();
    assert_eq!(err.code, CoreErrorCode::Parse);
}

#[test]
fn save_overwrites_the_previous_file() {
    let path = temp_path("charkeep_overwrite", "json");
    let roster = sample_roster();

    repository::save_json(&path, &roster).expect("first save");
    repository::save_json(&path, &roster[..1]).expect("second save");
    let loaded = repository::load_json(&path).expect("load JSON");
    fs::remove_file(&path).ok();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0], roster[0]);
}

#[test]
fn empty_roster_round_trips_in_both_formats() {
    let path = temp_path("charkeep_empty", "json");
    repository::save_json(&path, &[]).expect("save empty JSON");
    assert_eq!(repository::load_json(&path).expect("load empty JSON"), vec![]);
    fs::remove_file(&path).ok();

    let path = temp_path("charkeep_empty", "xml");
    repository::save_xml(&path, &[]).expect("save empty XML");
    assert_eq!(repository::load_xml(&path).expect("load empty XML"), vec![]);
    fs::remove_file(&path).ok();
}
