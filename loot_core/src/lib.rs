//! loot_core - Identifiers and items shared across the loot simulator
//!
//! This library provides:
//! - MonsterType: the closed set of monsters that can be slain
//! - TreasureType: the closed set of treasures that can drop
//! - TreasureItem: a named, weighted treasure entry inside a loot table

pub mod item;
pub mod types;

pub use item::TreasureItem;
pub use types::{MonsterType, TreasureType};
