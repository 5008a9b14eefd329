use crate::character::Character;
use crate::class::CharacterClass;
use crate::error::{CoreError, CoreErrorCode};

pub const LEVEL_RANGE: std::ops::RangeInclusive<i32> = 1..=100;
pub const HEALTH_RANGE: std::ops::RangeInclusive<i32> = 1..=1000;
pub const MANA_RANGE: std::ops::RangeInclusive<i32> = 0..=1000;

/// A modal editing session over a private copy of a record.
///
/// `create` starts from the default record, `edit` from a duplicate of
/// an existing one; the roster is never touched until the draft is
/// confirmed. Dropping the draft is cancellation. Setters accept raw
/// values; all rules are checked once, at [`Draft::confirm`].
#[derive(Debug)]
pub struct Draft {
    character: Character,
    target: Option<usize>,
}

/// Outcome of a confirmed draft: the validated record and the roster
/// position it replaces (`None` means append as a new record).
#[derive(Debug)]
pub struct Confirmed {
    pub character: Character,
    pub target: Option<usize>,
}

impl Draft {
    pub fn create() -> Self {
        Self {
            character: Character::default(),
            target: None,
        }
    }

    pub fn edit(index: usize, original: &Character) -> Self {
        Self {
            character: original.duplicate(),
            target: Some(index),
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn set_name(&mut self, name: &str) {
        self.character.name = name.to_string();
    }

    pub fn set_level(&mut self, level: i32) {
        self.character.level = level;
    }

    pub fn set_health(&mut self, health: i32) {
        self.character.health = health;
    }

    pub fn set_mana(&mut self, mana: i32) {
        self.character.mana = mana;
    }

    pub fn set_class(&mut self, class: CharacterClass) {
        self.character.class = class;
    }

    pub fn set_weapon_type(&mut self, weapon: &str) {
        self.character.weapon_type = weapon.to_string();
    }

    pub fn set_armor_type(&mut self, armor: &str) {
        self.character.armor_type = armor.to_string();
    }

    /// Appends an ability unless the text is blank. Returns whether the
    /// entry was added.
    pub fn add_ability(&mut self, ability: &str) -> bool {
        if ability.trim().is_empty() {
            return false;
        }
        self.character.abilities.push(ability.to_string());
        true
    }

    pub fn remove_ability(&mut self, index: usize) -> Result<String, CoreError> {
        if index >= self.character.abilities.len() {
            return Err(CoreError::bad_index(
                index,
                self.character.abilities.len(),
            ));
        }
        Ok(self.character.abilities.remove(index))
    }

    /// Validates and consumes the draft. On failure the draft is gone
    /// and the caller's roster is untouched, matching a rejected dialog.
    pub fn confirm(self) -> Result<Confirmed, CoreError> {
        validate(&self.character)?;
        Ok(Confirmed {
            character: self.character,
            target: self.target,
        })
    }
}

/// Confirm-time rules: every violation is reported in one message.
pub fn validate(character: &Character) -> Result<(), CoreError> {
    let mut problems = Vec::new();

    if character.name.trim().is_empty() {
        problems.push("name must not be empty".to_string());
    }
    if !LEVEL_RANGE.contains(&character.level) {
        problems.push(format!(
            "level {} outside {}..={}",
            character.level,
            LEVEL_RANGE.start(),
            LEVEL_RANGE.end()
        ));
    }
    if !HEALTH_RANGE.contains(&character.health) {
        problems.push(format!(
            "health {} outside {}..={}",
            character.health,
            HEALTH_RANGE.start(),
            HEALTH_RANGE.end()
        ));
    }
    if !MANA_RANGE.contains(&character.mana) {
        problems.push(format!(
            "mana {} outside {}..={}",
            character.mana,
            MANA_RANGE.start(),
            MANA_RANGE.end()
        ));
    }
    if character.weapon_type.trim().is_empty() {
        problems.push("weapon type must not be empty".to_string());
    }
    if character.armor_type.trim().is_empty() {
        problems.push("armor type must not be empty".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(CoreError::new(CoreErrorCode::Validation, problems.join("; ")))
    }
}
