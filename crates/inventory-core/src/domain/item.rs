//! Item Entity
//!
//! Leaf inventory entries with a stock quantity and an alert threshold.

use serde::{Deserialize, Serialize};

use super::container::ContainerSummary;
use super::entity::{ContainerId, Entity, ItemId};

/// An item as listed in a contents view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub id: ItemId,
    pub name: String,
    /// May be negative
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub alert_quantity: i64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parent: Option<ContainerId>,
}

impl ItemSummary {
    /// Stock has reached the alert threshold (a zero threshold disables alerts)
    pub fn is_low_stock(&self) -> bool {
        self.alert_quantity > 0 && self.quantity <= self.alert_quantity
    }
}

impl Entity for ItemSummary {
    type Id = ItemId;
    const KEY_PREFIX: &'static str = "i";

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Draft record backing the item creation form; serialized as the create payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NewItem {
    pub name: String,
    pub parent: Option<ContainerId>,
    pub quantity: u32,
    pub alert_quantity: u32,
    pub description: String,
}

/// Children of a browsed container, as supplied by the contents endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContainerContents {
    #[serde(default)]
    pub containers: Vec<ContainerSummary>,
    #[serde(default)]
    pub items: Vec<ItemSummary>,
}

impl ContainerContents {
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty() && self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64, alert_quantity: i64) -> ItemSummary {
        ItemSummary {
            id: 12,
            name: "M3 screws".to_string(),
            quantity,
            alert_quantity,
            location: String::new(),
            description: String::new(),
            parent: Some(7),
        }
    }

    #[test]
    fn test_low_stock_threshold() {
        assert!(!item(5, 0).is_low_stock());
        assert!(!item(0, 0).is_low_stock());
        assert!(item(2, 2).is_low_stock());
        assert!(item(1, 2).is_low_stock());
        assert!(!item(3, 2).is_low_stock());
        assert!(item(-4, 2).is_low_stock());
        assert!(!item(-4, 0).is_low_stock());
    }

    #[test]
    fn test_item_row_key() {
        assert_eq!(item(40, 0).row_key(), "i-12");
    }

    #[test]
    fn test_negative_stock_row_decodes() {
        let contents: ContainerContents = serde_json::from_str(
            r#"{"containers": [], "items": [
                {"id": 5, "name": "Fuse", "quantity": -3, "alert_quantity": 1},
                {"id": 6, "name": "Cable", "quantity": 12}
            ]}"#,
        )
        .unwrap();
        assert_eq!(contents.items[0].quantity, -3);
        assert!(contents.items[0].is_low_stock());
        assert_eq!(contents.items[1].alert_quantity, 0);
    }

    #[test]
    fn test_new_item_payload_shape() {
        let draft = NewItem {
            name: "Widget".to_string(),
            parent: Some(7),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Widget",
                "parent": 7,
                "quantity": 0,
                "alert_quantity": 0,
                "description": ""
            })
        );
    }

    #[test]
    fn test_contents_defaults_missing_lists() {
        let contents: ContainerContents = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(contents.is_empty());
    }
}
