use loot_core::{MonsterType, TreasureType};
use serde::Deserialize;

/// TOML configuration for a loot table file
#[derive(Debug, Deserialize)]
pub struct TableFileConfig {
    pub table: TableConfig,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

/// Configuration for the table itself
#[derive(Debug, Deserialize)]
pub struct TableConfig {
    pub id: String,
}

/// A single weighted item in a loot table
#[derive(Debug, Deserialize)]
pub struct ItemConfig {
    #[serde(rename = "type")]
    pub kind: TreasureType,
    pub name: String,
    #[serde(default)]
    pub weight: f64,
}

/// TOML configuration for the monster file
#[derive(Debug, Deserialize)]
pub struct MonsterFileConfig {
    #[serde(default)]
    pub monsters: Vec<MonsterConfig>,
}

/// A monster and the tables it rolls on
#[derive(Debug, Deserialize)]
pub struct MonsterConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MonsterType,
    #[serde(default)]
    pub tables: Vec<TableRefConfig>,
}

/// Reference from a monster to a loaded table
#[derive(Debug, Deserialize)]
pub struct TableRefConfig {
    pub table: String,
    /// Tables without a weight always roll
    #[serde(default = "default_table_weight")]
    pub weight: f64,
}

fn default_table_weight() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ref_weight_defaults_to_unconditional() {
        let config: MonsterFileConfig = toml::from_str(
            r#"
[[monsters]]
name = "Goblin"
type = "goblin"

[[monsters.tables]]
table = "common"

[[monsters.tables]]
table = "rare"
weight = 0.05
"#,
        )
        .unwrap();

        let goblin = &config.monsters[0];
        assert_eq!(goblin.kind, MonsterType::Goblin);
        assert_eq!(goblin.tables[0].weight, 1.0);
        assert_eq!(goblin.tables[1].weight, 0.05);
    }

    #[test]
    fn test_unknown_treasure_type_is_a_parse_error() {
        let result: Result<TableFileConfig, _> = toml::from_str(
            r#"
[table]
id = "bad"

[[items]]
type = "laserSword"
name = "Laser Sword"
weight = 1.0
"#,
        );
        assert!(result.is_err());
    }
}
