//! Plain text loot report

use loot_core::{MonsterType, TreasureType};
use sim_core::LootSession;
use std::collections::BTreeMap;
use tables_core::{LookupError, MonsterRegistry};

const SEPARATOR: &str = "---------------------------------------------------------";

/// Display names copied out of a registry, so event subscribers can own them
#[derive(Debug, Clone, Default)]
pub struct Labels {
    monsters: BTreeMap<MonsterType, String>,
    treasures: BTreeMap<TreasureType, String>,
}

impl Labels {
    pub fn from_registry(registry: &MonsterRegistry) -> Self {
        Labels {
            monsters: registry
                .monsters()
                .map(|m| (m.kind, m.name.clone()))
                .collect(),
            treasures: registry
                .treasure_names()
                .map(|(kind, name)| (kind, name.to_string()))
                .collect(),
        }
    }

    pub fn monster(&self, kind: MonsterType) -> Result<&str, LookupError> {
        self.monsters
            .get(&kind)
            .map(|s| s.as_str())
            .ok_or(LookupError::UnknownMonster(kind))
    }

    pub fn treasure(&self, kind: TreasureType) -> Result<&str, LookupError> {
        self.treasures
            .get(&kind)
            .map(|s| s.as_str())
            .ok_or(LookupError::UnknownTreasure(kind))
    }
}

/// Render a session: per monster its kills, then each treasure with its
/// count and share of all monsters slain in the session
pub fn render_session(session: &LootSession, labels: &Labels) -> Result<String, LookupError> {
    let total = session.total_monsters();
    let mut out = String::new();

    out.push_str(&format!("You just finished slaying {} monster(s)!\n", total));
    out.push_str("Here is all the loot that dropped!\n\n");

    for &monster in &session.monsters {
        out.push_str(&format!("Monster: {}\n", labels.monster(monster)?));
        out.push_str(&format!("Count: {}\n", session.kills(monster)));

        if let Some(treasures) = session.treasure_counts(monster) {
            for (&treasure, &count) in treasures {
                let pct = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                };
                out.push_str(&format!("\tLoot: {}\n", labels.treasure(treasure)?));
                out.push_str(&format!("\tCount: {} ({:.2}%)\n\n", count, pct));
            }
        }

        out.push_str(&format!("\n{}\n\n", SEPARATOR));
    }

    Ok(out)
}
