use charkeep_core::{Character, CharacterClass};
use charkeep_render::{
    EMPTY_ROSTER_LINE, render_json_roster, render_roster, render_roster_lines, render_sheet,
};

fn sample_roster() -> Vec<Character> {
    vec![
        Character {
            name: "Aria".to_string(),
            level: 5,
            health: 120,
            mana: 40,
            abilities: vec!["Slash".to_string()],
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
fn roster_lines_are_numbered_from_one() {
    let lines = render_roster_lines(&sample_roster());
    assert_eq!(
        lines,
        vec![
            "1. Aria (Lvl 5) - Warrior".to_string(),
            "2. Borin (Lvl 12) - Priest".to_string(),
        ]
    );
}

#[test]
fn empty_roster_renders_placeholder() {
    assert_eq!(render_roster(&[]), format!("{EMPTY_ROSTER_LINE}\n"));
    assert!(render_roster_lines(&[]).is_empty());
}

#[test]
fn sheet_lists_every_field() {
    let roster = sample_roster();
    let sheet = render_sheet(&roster[0]);
    let lines: Vec<&str> = sheet.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Name:    Aria",
            "Class:   Warrior",
            "Level:   5",
            "Health:  120",
            "Mana:    40",
            "Weapon:  Sword",
            "Armor:   Heavy",
            "Abilities:",
            "  - Slash",
        ]
    );
}

#[test]
fn sheet_marks_missing_abilities() {
    let roster = sample_roster();
    let sheet = render_sheet(&roster[1]);
    assert!(sheet.ends_with("Abilities:\n  (none)\n"));
}

#[test]
fn json_roster_uses_canonical_key_order() {
    let value = render_json_roster(&sample_roster());
    let records = value.as_array().expect("array of records");
    assert_eq!(records.len(), 2);

    let keys: Vec<&str> = records[0]
        .as_object()
        .expect("record object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        vec![
            "Name",
            "Level",
            "Health",
            "Mana",
            "Abilities",
            "WeaponType",
            "CharacterClass",
            "ArmorType",
        ]
    );
    assert_eq!(records[1]["CharacterClass"], "Priest");
    assert_eq!(records[1]["Abilities"].as_array().map(Vec::len), Some(0));
}
