use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Monster kinds known to the simulator
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum MonsterType {
    Goblin,
    Skeleton,
    Dragon,
    Zombie,
}

impl MonsterType {
    /// Get all monster variants in declaration order
    pub fn all() -> Vec<MonsterType> {
        MonsterType::iter().collect()
    }
}

/// Treasure kinds that loot tables can grant
///
/// `None` is reserved for the "no drop" sentinel and never appears in data.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum TreasureType {
    #[default]
    None,
    RegenerationRing,
    CursedRing,
    Nothing,
    HeaterShield,
    KiteShield,
    GoldPile,
    RustySword,
    GodlySword,
    SmallShield,
    SharpSword,
    MagicStaff,
    Apple,
    AmuletOfDestruction,
}

impl TreasureType {
    /// Whether this is the reserved sentinel kind
    pub fn is_none(&self) -> bool {
        matches!(self, TreasureType::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_monster_ids_round_trip_through_strum() {
        for monster in MonsterType::all() {
            let id = monster.to_string();
            assert_eq!(MonsterType::from_str(&id).unwrap(), monster);
        }
        assert_eq!(MonsterType::from_str("DRAGON").unwrap(), MonsterType::Dragon);
        assert!(MonsterType::from_str("dragonling").is_err());
    }

    #[test]
    fn test_treasure_ids_are_camel_case() {
        assert_eq!(TreasureType::AmuletOfDestruction.to_string(), "amuletOfDestruction");
        let parsed: TreasureType = serde_json::from_str("\"rustySword\"").unwrap();
        assert_eq!(parsed, TreasureType::RustySword);
        assert_eq!(serde_json::to_string(&TreasureType::None).unwrap(), "\"none\"");
    }

    #[test]
    fn test_only_sentinel_is_none() {
        let sentinels: Vec<_> = TreasureType::iter().filter(|t| t.is_none()).collect();
        assert_eq!(sentinels, vec![TreasureType::None]);
        assert!(!TreasureType::Nothing.is_none());
    }
}
