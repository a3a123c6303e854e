use crate::config::{MonsterFileConfig, TableFileConfig};
use crate::monster::{DropResult, MonsterTemplate};
use crate::table::LootTable;
use crate::{ConfigError, LookupError, ValidationError};
use loot_core::{MonsterType, TreasureType};
use rand::Rng;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, info};

/// Monster definitions file inside a data directory
pub const MONSTER_FILE: &str = "monsters.toml";
/// Loot table directory inside a data directory
pub const TABLE_DIR: &str = "loot-tables";

/// Read-only registry of monster templates, keyed by type
#[derive(Debug, Default)]
pub struct MonsterRegistry {
    monsters: BTreeMap<MonsterType, MonsterTemplate>,
    treasure_names: BTreeMap<TreasureType, String>,
}

impl MonsterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a data directory: every table under `loot-tables/`, then `monsters.toml`
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut tables = HashMap::new();
        load_table_dir(&dir.join(TABLE_DIR), &mut tables)?;

        let monster_path = dir.join(MONSTER_FILE);
        let config: MonsterFileConfig = read_toml(&monster_path)?;
        let in_monster_file = |error: ValidationError| ConfigError::Validation {
            error,
            path: Some(monster_path.clone()),
        };

        let mut templates = Vec::with_capacity(config.monsters.len());
        for monster in config.monsters {
            let monster_tables = monster
                .tables
                .into_iter()
                .map(|r| {
                    tables
                        .get(&r.table)
                        .cloned()
                        .map(|t: LootTable| t.with_weight(r.weight))
                        .ok_or_else(|| ValidationError::UnknownTable {
                            monster: monster.kind,
                            table: r.table.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()
                .map_err(in_monster_file)?;

            templates.push(MonsterTemplate::new(monster.name, monster.kind, monster_tables));
        }

        let registry = Self::from_templates(templates).map_err(in_monster_file)?;
        info!(
            monsters = registry.len(),
            tables = tables.len(),
            dir = %dir.display(),
            "Loaded loot data"
        );
        Ok(registry)
    }

    /// Build a registry from in-memory templates
    pub fn from_templates(
        templates: impl IntoIterator<Item = MonsterTemplate>,
    ) -> Result<Self, ValidationError> {
        let mut registry = Self::new();
        for template in templates {
            registry.insert(template)?;
        }
        Ok(registry)
    }

    fn insert(&mut self, template: MonsterTemplate) -> Result<(), ValidationError> {
        template.validate()?;
        if self.monsters.contains_key(&template.kind) {
            return Err(ValidationError::DuplicateMonster(template.kind));
        }

        for item in template.tables().iter().flat_map(|t| t.items()) {
            self.treasure_names
                .entry(item.kind)
                .or_insert_with(|| item.name.clone());
        }
        self.monsters.insert(template.kind, template);
        Ok(())
    }

    /// Get a monster by type
    pub fn get(&self, kind: MonsterType) -> Result<&MonsterTemplate, LookupError> {
        self.monsters
            .get(&kind)
            .ok_or(LookupError::UnknownMonster(kind))
    }

    /// Check if a monster type is loaded
    pub fn contains(&self, kind: MonsterType) -> bool {
        self.monsters.contains_key(&kind)
    }

    /// Loaded monster types, in declaration order of [`MonsterType`]
    pub fn monster_types(&self) -> impl Iterator<Item = MonsterType> + '_ {
        self.monsters.keys().copied()
    }

    pub fn monsters(&self) -> impl Iterator<Item = &MonsterTemplate> {
        self.monsters.values()
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Pick a loaded monster type uniformly at random
    pub fn random_type<R: Rng>(&self, rng: &mut R) -> Option<MonsterType> {
        if self.monsters.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.monsters.len());
        self.monster_types().nth(idx)
    }

    pub fn monster_name(&self, kind: MonsterType) -> Result<&str, LookupError> {
        self.get(kind).map(|m| m.name.as_str())
    }

    /// Display name of a treasure found in any loaded table
    pub fn treasure_name(&self, kind: TreasureType) -> Result<&str, LookupError> {
        self.treasure_names
            .get(&kind)
            .map(|s| s.as_str())
            .ok_or(LookupError::UnknownTreasure(kind))
    }

    /// Every loaded treasure type with its display name
    pub fn treasure_names(&self) -> impl Iterator<Item = (TreasureType, &str)> {
        self.treasure_names.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Roll loot for a monster by type
    pub fn roll<R: Rng>(&self, kind: MonsterType, rng: &mut R) -> Result<DropResult, LookupError> {
        Ok(self.get(kind)?.roll_loot(rng))
    }
}

/// Load tables from a directory recursively
fn load_table_dir(dir: &Path, tables: &mut HashMap<String, LootTable>) -> Result<(), ConfigError> {
    if !dir.exists() {
        return Ok(());
    }

    let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::Io {
        error: e,
        path: Some(dir.to_path_buf()),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;
        let path = entry.path();

        if path.is_dir() {
            load_table_dir(&path, tables)?;
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            let config: TableFileConfig = read_toml(&path)?;
            let in_table_file = |error| ConfigError::Validation {
                error,
                path: Some(path.clone()),
            };

            let table = LootTable::from_config(config).map_err(in_table_file)?;
            if tables.contains_key(&table.id) {
                return Err(in_table_file(ValidationError::DuplicateTable(table.id)));
            }

            debug!(table = %table.id, items = table.items().len(), path = %path.display(), "Loaded loot table");
            tables.insert(table.id.clone(), table);
        }
    }

    Ok(())
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        error: e,
        path: Some(path.to_path_buf()),
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        error: e,
        path: path.to_path_buf(),
    })
}
