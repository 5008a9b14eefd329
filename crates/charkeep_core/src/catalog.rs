//! Fixed option sets offered by the edit dialog.
//!
//! Weapon and armor stay free text on the record; these lists are the
//! choices a front-end presents, built explicitly at startup rather
//! than bound from UI state.

pub const WEAPON_OPTIONS: [&str; 6] = ["Sword", "Bow", "Staff", "Dagger", "Axe", "Hammer"];

pub const ARMOR_OPTIONS: [&str; 4] = ["Light", "Medium", "Heavy", "Magic"];
