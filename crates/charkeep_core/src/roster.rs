use crate::character::Character;
use crate::error::CoreError;

/// The in-memory list of character records.
///
/// Owned exclusively by the front-end controller; all mutation is
/// synchronous and positional. No uniqueness or ordering constraints.
#[derive(Debug, Default)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
        self.characters.iter()
    }

    /// Appends a record at the end of the list.
    pub fn add(&mut self, character: Character) {
        self.characters.push(character);
    }

    /// Replaces the record at `index`, leaving every other position as is.
    pub fn replace(&mut self, index: usize, character: Character) -> Result<(), CoreError> {
        match self.characters.get_mut(index) {
            Some(slot) => {
                *slot = character;
                Ok(())
            }
            None => Err(CoreError::bad_index(index, self.characters.len())),
        }
    }

    pub fn remove(&mut self, index: usize) -> Result<Character, CoreError> {
        if index >= self.characters.len() {
            return Err(CoreError::bad_index(index, self.characters.len()));
        }
        Ok(self.characters.remove(index))
    }

    /// Appends a renamed duplicate of the record at `index` and returns
    /// the position of the new record, so callers can select it.
    pub fn clone_at(&mut self, index: usize) -> Result<usize, CoreError> {
        let original = self
            .characters
            .get(index)
            .ok_or_else(|| CoreError::bad_index(index, self.characters.len()))?;
        let copy = original.duplicate_renamed();
        self.characters.push(copy);
        Ok(self.characters.len() - 1)
    }

    /// Replaces the entire contents, e.g. after a successful load.
    pub fn reload(&mut self, characters: Vec<Character>) {
        self.characters = characters;
    }

    pub fn into_characters(self) -> Vec<Character> {
        self.characters
    }
}

impl From<Vec<Character>> for Roster {
    fn from(characters: Vec<Character>) -> Self {
        Self { characters }
    }
}
