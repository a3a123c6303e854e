use crate::config::TableFileConfig;
use crate::ValidationError;
use loot_core::TreasureItem;
use rand::Rng;

/// Weight marking a table as unconditional
pub const UNCONDITIONAL_WEIGHT: f64 = 1.0;

/// An ordered list of weighted treasures
///
/// `weight` decides how the table takes part in a monster's roll: tables at
/// [`UNCONDITIONAL_WEIGHT`] always roll together, any other weight makes the
/// table compete with its exclusive siblings for a single pick.
#[derive(Debug, Clone, PartialEq)]
pub struct LootTable {
    pub id: String,
    pub weight: f64,
    items: Vec<TreasureItem>,
}

impl LootTable {
    /// Create an unconditional table
    pub fn new(id: impl Into<String>, items: Vec<TreasureItem>) -> Self {
        LootTable {
            id: id.into(),
            weight: UNCONDITIONAL_WEIGHT,
            items,
        }
    }

    /// Parse a loot table from config
    pub(crate) fn from_config(config: TableFileConfig) -> Result<Self, ValidationError> {
        let items = config
            .items
            .into_iter()
            .map(|i| TreasureItem::new(i.kind, i.name, i.weight))
            .collect();

        let table = LootTable::new(config.table.id, items);
        table.validate()?;
        Ok(table)
    }

    /// Copy of this table with a different table weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn items(&self) -> &[TreasureItem] {
        &self.items
    }

    pub fn is_unconditional(&self) -> bool {
        self.weight == UNCONDITIONAL_WEIGHT
    }

    pub fn is_exclusive(&self) -> bool {
        !self.is_unconditional()
    }

    /// Sum of all item weights
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|i| i.weight).sum()
    }

    /// Check item and table weights
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.weight.is_finite() || !(0.0..=UNCONDITIONAL_WEIGHT).contains(&self.weight) {
            return Err(ValidationError::InvalidTableWeight {
                table: self.id.clone(),
                weight: self.weight,
            });
        }

        for item in &self.items {
            if item.is_none() {
                return Err(ValidationError::ReservedTreasureType {
                    table: self.id.clone(),
                    item: item.name.clone(),
                });
            }
            if !item.weight.is_finite() || item.weight < 0.0 {
                return Err(ValidationError::InvalidItemWeight {
                    table: self.id.clone(),
                    item: item.name.clone(),
                    weight: item.weight,
                });
            }
        }

        Ok(())
    }

    /// Roll this table once
    ///
    /// Returns [`TreasureItem::none`] when the table has no positive weight,
    /// in which case no random value is consumed.
    pub fn resolve<R: Rng>(&self, rng: &mut R) -> TreasureItem {
        let total = self.total_weight();
        if total <= 0.0 {
            return TreasureItem::none();
        }

        let roll = rng.gen_range(0.0..total);
        match select_index(self.items.iter().map(|i| i.weight), roll) {
            Some(idx) => self.items[idx].clone(),
            None => TreasureItem::none(),
        }
    }
}

/// Roulette walk over `weights` for a roll in `[0, total)`
///
/// Returns the first index whose cumulative weight exceeds `roll`. If float
/// rounding carries `roll` past the last threshold, the last positive weight
/// wins. `None` only when no weight is positive.
pub(crate) fn select_index(weights: impl IntoIterator<Item = f64>, roll: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    let mut last_positive = None;
    for (i, w) in weights.into_iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        if roll < cumulative {
            return Some(i);
        }
        last_positive = Some(i);
    }
    last_positive
}
