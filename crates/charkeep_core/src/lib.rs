pub mod catalog;
pub mod character;
pub mod class;
pub mod editor;
pub mod error;
pub mod repository;
pub mod roster;

pub use character::{CLONE_SUFFIX, Character};
pub use class::CharacterClass;
pub use editor::{Confirmed, Draft, validate};
pub use error::{CoreError, CoreErrorCode};
pub use roster::Roster;
