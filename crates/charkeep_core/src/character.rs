use std::fmt;

use serde::{Deserialize, Serialize};

use crate::class::CharacterClass;

/// Name suffix appended when a record is cloned from the roster.
pub const CLONE_SUFFIX: &str = " (copy)";

/// A character record as it appears on disk and in the roster.
///
/// Field names are serialized in PascalCase so both the JSON and XML
/// documents carry `Name`, `Level`, ..., `CharacterClass`, `ArmorType`.
/// The record itself enforces nothing; range and emptiness rules are
/// applied at confirm time by [`crate::editor::Draft`].
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Character {
    pub name: String,
    pub level: i32,
    pub health: i32,
    pub mana: i32,
    pub abilities: Vec<String>,
    pub weapon_type: String,
    #[serde(rename = "CharacterClass")]
    pub class: CharacterClass,
    pub armor_type: String,
}

impl Character {
    /// Explicit field-by-field copy. The abilities vector is duplicated
    /// by value, so mutating the copy never touches the original.
    pub fn duplicate(&self) -> Character {
        Character {
            name: self.name.clone(),
            level: self.level,
            health: self.health,
            mana: self.mana,
            abilities: self.abilities.iter().cloned().collect(),
            weapon_type: self.weapon_type.clone(),
            class: self.class,
            armor_type: self.armor_type.clone(),
        }
    }

    /// Duplicate with the clone suffix on the name, for roster cloning.
    pub fn duplicate_renamed(&self) -> Character {
        let mut copy = self.duplicate();
        copy.name.push_str(CLONE_SUFFIX);
        copy
    }
}

impl Default for Character {
    fn default() -> Self {
        Character {
            name: "New Character".to_string(),
            level: 1,
            health: 100,
            mana: 100,
            abilities: Vec::new(),
            weapon_type: "None".to_string(),
            class: CharacterClass::Warrior,
            armor_type: "Light".to_string(),
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Lvl {}) - {}", self.name, self.level, self.class)
    }
}
