use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::class::CharacterClass;
use crate::error::{CoreError, CoreErrorCode};

/// Default roster file targets, as in the original program.
pub const JSON_FILE: &str = "characters.json";
pub const XML_FILE: &str = "characters.xml";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// Serializes the full roster as a pretty-printed JSON array,
/// overwriting `path`. No atomic rename, no backup.
pub fn save_json(path: &Path, characters: &[Character]) -> Result<(), CoreError> {
    let text = serde_json::to_string_pretty(characters).map_err(|e| {
        CoreError::new(CoreErrorCode::Parse, format!("failed to encode JSON: {e}"))
    })?;
    write_text(path, &text)
}

/// Loads the full roster from a JSON file. A missing file is not an
/// error: it yields an empty roster.
pub fn load_json(path: &Path) -> Result<Vec<Character>, CoreError> {
    let Some(text) = read_text(path)? else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&text).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Parse,
            format!("failed to parse {}: {e}", path.display()),
        )
    })
}

/// Same contract as [`save_json`], different on-disk shape:
/// `<ArrayOfCharacter><Character>...` with a nested ability list.
pub fn save_xml(path: &Path, characters: &[Character]) -> Result<(), CoreError> {
    let doc = XmlDocument::from_characters(characters);
    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut body);
    serializer.indent(' ', 2);
    doc.serialize(serializer).map_err(|e| {
        CoreError::new(CoreErrorCode::Parse, format!("failed to encode XML: {e}"))
    })?;

    let mut text = String::with_capacity(XML_DECLARATION.len() + body.len() + 1);
    text.push_str(XML_DECLARATION);
    text.push_str(&body);
    text.push('\n');
    write_text(path, &text)
}

pub fn load_xml(path: &Path) -> Result<Vec<Character>, CoreError> {
    let Some(text) = read_text(path)? else {
        return Ok(Vec::new());
    };
    let doc: XmlDocument = quick_xml::de::from_str(&text).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Parse,
            format!("failed to parse {}: {e}", path.display()),
        )
    })?;
    Ok(doc.into_characters())
}

fn write_text(path: &Path, text: &str) -> Result<(), CoreError> {
    fs::write(path, text).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Io,
            format!("failed to write {}: {e}", path.display()),
        )
    })
}

/// Reads the file, mapping "not found" to `None` so loads from a path
/// that was never saved stay non-destructive.
fn read_text(path: &Path) -> Result<Option<String>, CoreError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CoreError::new(
            CoreErrorCode::Io,
            format!("failed to read {}: {e}", path.display()),
        )),
    }
}

// ---------------------------------------------------------------------------
// XML document shape
// ---------------------------------------------------------------------------
// The XML file nests abilities one level deeper than the flat JSON
// array, so the on-disk shape gets its own mirror structs.

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "ArrayOfCharacter")]
struct XmlDocument {
    #[serde(rename = "Character", default)]
    characters: Vec<XmlCharacter>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct XmlCharacter {
    name: String,
    level: i32,
    health: i32,
    mana: i32,
    abilities: XmlAbilities,
    weapon_type: String,
    #[serde(rename = "CharacterClass")]
    class: CharacterClass,
    armor_type: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct XmlAbilities {
    #[serde(rename = "Ability", default)]
    entries: Vec<String>,
}

impl XmlDocument {
    fn from_characters(characters: &[Character]) -> Self {
        Self {
            characters: characters.iter().map(XmlCharacter::from_character).collect(),
        }
    }

    fn into_characters(self) -> Vec<Character> {
        self.characters
            .into_iter()
            .map(XmlCharacter::into_character)
            .collect()
    }
}

impl XmlCharacter {
    fn from_character(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            level: character.level,
            health: character.health,
            mana: character.mana,
            abilities: XmlAbilities {
                entries: character.abilities.clone(),
            },
            weapon_type: character.weapon_type.clone(),
            class: character.class,
            armor_type: character.armor_type.clone(),
        }
    }

    fn into_character(self) -> Character {
        Character {
            name: self.name,
            level: self.level,
            health: self.health,
            mana: self.mana,
            abilities: self.abilities.entries,
            weapon_type: self.weapon_type,
            class: self.class,
            armor_type: self.armor_type,
        }
    }
}
