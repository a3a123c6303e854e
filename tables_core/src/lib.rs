//! tables_core - Weighted loot tables and monster loot resolution
//!
//! This library provides:
//! - LootTable: roulette-wheel resolution of a single weighted table
//! - MonsterTemplate: the two-phase exclusive/unconditional loot roll
//! - MonsterRegistry: validated monster and table definitions loaded from TOML

mod config;
mod monster;
mod registry;
mod table;

pub use monster::{DropResult, MonsterTemplate};
pub use registry::{MonsterRegistry, MONSTER_FILE, TABLE_DIR};
pub use table::{LootTable, UNCONDITIONAL_WEIGHT};

use loot_core::{MonsterType, TreasureType};
use std::path::PathBuf;
use thiserror::Error;

/// Error loading monster and loot table configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path:?}': {error}")]
    Validation {
        error: ValidationError,
        path: Option<PathBuf>,
    },
}

impl From<ValidationError> for ConfigError {
    fn from(error: ValidationError) -> Self {
        ConfigError::Validation { error, path: None }
    }
}

/// Malformed loot data, rejected before any roll happens
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("item '{item}' in table '{table}' has invalid weight {weight}")]
    InvalidItemWeight {
        table: String,
        item: String,
        weight: f64,
    },
    #[error("table '{table}' has invalid weight {weight} (expected 0.0..=1.0)")]
    InvalidTableWeight { table: String, weight: f64 },
    #[error("exclusive tables of {monster} sum to {total}, above 1.0")]
    ExclusiveWeightOverflow { monster: MonsterType, total: f64 },
    #[error("item '{item}' in table '{table}' uses the reserved type '{}'", TreasureType::None)]
    ReservedTreasureType { table: String, item: String },
    #[error("{monster} references unknown table '{table}'")]
    UnknownTable { monster: MonsterType, table: String },
    #[error("duplicate table id '{0}'")]
    DuplicateTable(String),
    #[error("duplicate monster type '{0}'")]
    DuplicateMonster(MonsterType),
}

/// Error looking up a loaded definition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Unknown monster: {0}")]
    UnknownMonster(MonsterType),
    #[error("Unknown treasure: {0}")]
    UnknownTreasure(TreasureType),
}
