use crate::table::{select_index, LootTable};
use crate::ValidationError;
use loot_core::{MonsterType, TreasureItem};
use rand::Rng;
use std::iter;
use tracing::trace;

/// Slack allowed when exclusive weights are summed, e.g. 0.1 + 0.2 + 0.7
const EXCLUSIVE_WEIGHT_TOLERANCE: f64 = 1e-9;

/// A monster and the loot tables it rolls on when slain
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterTemplate {
    pub name: String,
    pub kind: MonsterType,
    tables: Vec<LootTable>,
}

/// Items produced by one loot roll, one entry per resolved table
///
/// Entries may be the [`TreasureItem::none`] sentinel when a resolved table
/// granted nothing; [`DropResult::drops`] skips those.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropResult {
    items: Vec<TreasureItem>,
}

impl MonsterTemplate {
    pub fn new(name: impl Into<String>, kind: MonsterType, tables: Vec<LootTable>) -> Self {
        MonsterTemplate {
            name: name.into(),
            kind,
            tables,
        }
    }

    pub fn tables(&self) -> &[LootTable] {
        &self.tables
    }

    /// Tables competing for the single exclusive pick, in stored order
    pub fn exclusive_tables(&self) -> impl Iterator<Item = &LootTable> {
        self.tables.iter().filter(|t| t.is_exclusive())
    }

    /// Tables that roll together when no exclusive table is picked
    pub fn unconditional_tables(&self) -> impl Iterator<Item = &LootTable> {
        self.tables.iter().filter(|t| t.is_unconditional())
    }

    /// Sum of exclusive table weights
    pub fn exclusive_weight(&self) -> f64 {
        self.exclusive_tables().map(|t| t.weight).sum()
    }

    /// Check every table and the exclusive weight budget
    pub fn validate(&self) -> Result<(), ValidationError> {
        for table in &self.tables {
            table.validate()?;
        }

        let total = self.exclusive_weight();
        if total > 1.0 + EXCLUSIVE_WEIGHT_TOLERANCE {
            return Err(ValidationError::ExclusiveWeightOverflow {
                monster: self.kind,
                total,
            });
        }

        Ok(())
    }

    /// Roll this monster's loot
    ///
    /// One draw in `[0, 1)` picks either a single exclusive table or, with the
    /// weight left over by the exclusive tables, every unconditional table.
    /// Each picked table is then resolved with its own draw.
    pub fn roll_loot<R: Rng>(&self, rng: &mut R) -> DropResult {
        if self.tables.is_empty() {
            return DropResult::default();
        }

        let (exclusive, unconditional): (Vec<&LootTable>, Vec<&LootTable>) =
            self.tables.iter().partition(|t| t.is_exclusive());

        let exclusive_total: f64 = exclusive.iter().map(|t| t.weight).sum();
        let remainder = (1.0 - exclusive_total).max(0.0);
        let buckets = exclusive
            .iter()
            .map(|t| t.weight)
            .chain(iter::once(remainder));

        let roll = rng.gen::<f64>();
        match select_index(buckets, roll) {
            Some(idx) if idx < exclusive.len() => {
                let table = exclusive[idx];
                trace!(monster = %self.kind, table = %table.id, roll, "exclusive table picked");
                DropResult {
                    items: vec![table.resolve(rng)],
                }
            }
            _ => {
                trace!(monster = %self.kind, roll, tables = unconditional.len(), "rolling unconditional tables");
                unconditional.iter().map(|t| t.resolve(rng)).collect()
            }
        }
    }
}

impl DropResult {
    /// Every entry, sentinels included
    pub fn items(&self) -> &[TreasureItem] {
        &self.items
    }

    /// Entries that are actual treasure
    pub fn drops(&self) -> impl Iterator<Item = &TreasureItem> {
        self.items.iter().filter(|i| !i.is_none())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<TreasureItem> {
        self.items
    }
}

impl FromIterator<TreasureItem> for DropResult {
    fn from_iter<I: IntoIterator<Item = TreasureItem>>(iter: I) -> Self {
        DropResult {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DropResult {
    type Item = &'a TreasureItem;
    type IntoIter = std::slice::Iter<'a, TreasureItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
