use crate::types::TreasureType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A treasure that can be granted by a loot table
///
/// `weight` is relative to the other items of the containing table, not a
/// probability on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreasureItem {
    #[serde(rename = "type")]
    pub kind: TreasureType,
    pub name: String,
    pub weight: f64,
}

impl TreasureItem {
    pub fn new(kind: TreasureType, name: impl Into<String>, weight: f64) -> Self {
        TreasureItem {
            kind,
            name: name.into(),
            weight,
        }
    }

    /// The "no drop" sentinel returned when a table grants nothing
    pub fn none() -> Self {
        TreasureItem {
            kind: TreasureType::None,
            name: "No drop".to_string(),
            weight: 0.0,
        }
    }

    pub fn is_none(&self) -> bool {
        self.kind.is_none()
    }
}

impl fmt::Display for TreasureItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel() {
        let none = TreasureItem::none();
        assert!(none.is_none());
        assert_eq!(none.weight, 0.0);
        assert_eq!(none.name, "No drop");
        assert_eq!(none.to_string(), "No drop");

        let apple = TreasureItem::new(TreasureType::Apple, "Apple", 2.0);
        assert!(!apple.is_none());
        assert_eq!(apple.to_string(), "Apple");
    }

    #[test]
    fn test_deserialize_uses_type_key() {
        let item: TreasureItem =
            serde_json::from_str(r#"{"type":"goldPile","name":"Gold Pile","weight":0.5}"#)
                .unwrap();
        assert_eq!(item.kind, TreasureType::GoldPile);
        assert_eq!(item.name, "Gold Pile");
    }
}
