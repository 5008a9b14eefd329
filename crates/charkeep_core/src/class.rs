use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CharacterClass {
    #[default]
    Warrior,
    Mage,
    Rogue,
    Priest,
    Hunter,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 5] = [
        Self::Warrior,
        Self::Mage,
        Self::Rogue,
        Self::Priest,
        Self::Hunter,
    ];

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Warrior => "Warrior",
            Self::Mage => "Mage",
            Self::Rogue => "Rogue",
            Self::Priest => "Priest",
            Self::Hunter => "Hunter",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
