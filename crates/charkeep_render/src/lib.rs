use std::fmt::Write as _;

use charkeep_core::Character;
use serde_json::{Map as JsonMap, Value as JsonValue};

const SHEET_LABEL_WIDTH: usize = 8;

/// Placeholder shown instead of list lines when the roster is empty.
pub const EMPTY_ROSTER_LINE: &str = "(no characters)";

/// One numbered line per record, 1-based, in roster order.
pub fn render_roster_lines(characters: &[Character]) -> Vec<String> {
    characters
        .iter()
        .enumerate()
        .map(|(index, character)| format!("{}. {character}", index + 1))
        .collect()
}

pub fn render_roster(characters: &[Character]) -> String {
    if characters.is_empty() {
        return format!("{EMPTY_ROSTER_LINE}\n");
    }
    let mut out = String::new();
    for line in render_roster_lines(characters) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Full detail block for one record, every field plus the ability list.
pub fn render_sheet(character: &Character) -> String {
    let mut out = String::new();
    sheet_line(&mut out, "Name", &character.name);
    sheet_line(&mut out, "Class", character.class.as_str());
    sheet_line(&mut out, "Level", &character.level.to_string());
    sheet_line(&mut out, "Health", &character.health.to_string());
    sheet_line(&mut out, "Mana", &character.mana.to_string());
    sheet_line(&mut out, "Weapon", &character.weapon_type);
    sheet_line(&mut out, "Armor", &character.armor_type);
    out.push_str("Abilities:\n");
    if character.abilities.is_empty() {
        out.push_str("  (none)\n");
    } else {
        for ability in &character.abilities {
            let _ = writeln!(out, "  - {ability}");
        }
    }
    out
}

fn sheet_line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{label}:{}{value}", " ".repeat(SHEET_LABEL_WIDTH - label.len()));
}

/// JSON value for one record with canonical top-level key order.
pub fn render_json_character(character: &Character) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert(
        "Name".to_string(),
        JsonValue::String(character.name.clone()),
    );
    out.insert("Level".to_string(), JsonValue::from(character.level));
    out.insert("Health".to_string(), JsonValue::from(character.health));
    out.insert("Mana".to_string(), JsonValue::from(character.mana));
    out.insert(
        "Abilities".to_string(),
        JsonValue::Array(
            character
                .abilities
                .iter()
                .map(|a| JsonValue::String(a.clone()))
                .collect(),
        ),
    );
    out.insert(
        "WeaponType".to_string(),
        JsonValue::String(character.weapon_type.clone()),
    );
    out.insert(
        "CharacterClass".to_string(),
        JsonValue::String(character.class.as_str().to_string()),
    );
    out.insert(
        "ArmorType".to_string(),
        JsonValue::String(character.armor_type.clone()),
    );
    JsonValue::Object(out)
}

pub fn render_json_roster(characters: &[Character]) -> JsonValue {
    JsonValue::Array(characters.iter().map(render_json_character).collect())
}
