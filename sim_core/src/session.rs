use loot_core::{MonsterType, TreasureType};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tables_core::DropResult;

/// Treasure type to number dropped
pub type TreasureCounts = BTreeMap<TreasureType, u32>;

/// Kills and drops recorded over one slaying session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LootSession {
    /// Monster types slain during this session
    pub monsters: BTreeSet<MonsterType>,
    /// Kills per monster type
    pub monster_counts: BTreeMap<MonsterType, u32>,
    /// Drops per monster type
    pub loot: BTreeMap<MonsterType, TreasureCounts>,
}

impl LootSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one kill and whatever it dropped
    pub fn record(&mut self, monster: MonsterType, result: &DropResult) {
        self.monsters.insert(monster);
        *self.monster_counts.entry(monster).or_insert(0) += 1;

        let treasures = self.loot.entry(monster).or_default();
        for item in result.drops() {
            *treasures.entry(item.kind).or_insert(0) += 1;
        }
    }

    /// Total kills across all monster types
    pub fn total_monsters(&self) -> u32 {
        self.monster_counts.values().sum()
    }

    pub fn kills(&self, monster: MonsterType) -> u32 {
        self.monster_counts.get(&monster).copied().unwrap_or(0)
    }

    pub fn treasure_counts(&self, monster: MonsterType) -> Option<&TreasureCounts> {
        self.loot.get(&monster)
    }

    /// Total drops of one treasure across all monsters
    pub fn treasure_total(&self, treasure: TreasureType) -> u32 {
        self.loot
            .values()
            .filter_map(|counts| counts.get(&treasure))
            .sum()
    }

    /// Whether anything at all dropped
    pub fn has_loot(&self) -> bool {
        self.loot.values().any(|counts| !counts.is_empty())
    }
}
