//! Character entity - player characters with an attached item inventory.

use serde::{Deserialize, Serialize};

use crate::entities::Item;
use crate::error::DomainError;

/// A player character.
///
/// The `items` sequence holds full item copies taken at assignment time,
/// in assignment order. The same item id may appear more than once, and
/// entries do not track the item store after assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub level: i64,
    pub items: Vec<Item>,
}

impl Character {
    pub fn new(id: u64, name: impl Into<String>, class_name: impl Into<String>, level: i64) -> Self {
        Self {
            id,
            name: name.into(),
            class_name: class_name.into(),
            level,
            items: Vec::new(),
        }
    }

    /// Append a copy of an item to the inventory. Duplicates are allowed.
    pub fn assign_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the first inventory entry with the given id, preserving the
    /// order of the rest.
    pub fn remove_item_once(&mut self, item_id: u64) -> Result<(), DomainError> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or(DomainError::ItemNotOnCharacter)?;
        self.items.remove(index);
        Ok(())
    }

    /// First item of type "amulet" in assignment order, if any.
    pub fn first_amulet(&self) -> Option<&Item> {
        self.items.iter().find(|i| i.is_amulet())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Character {
        Character::new(1, "Hero", "Warrior", 3)
    }

    #[test]
    fn serializes_class_under_the_json_keyword() {
        let json = serde_json::to_value(hero()).unwrap();
        assert_eq!(json["class"], "Warrior");
        assert_eq!(json["items"], serde_json::json!([]));
    }

    #[test]
    fn remove_item_once_only_removes_the_first_duplicate() {
        let mut c = hero();
        c.assign_item(Item::new(1, "Ring", 5));
        c.assign_item(Item::new(2, "Cloak", 2));
        c.assign_item(Item::new(1, "Ring", 5));

        c.remove_item_once(1).unwrap();
        let ids: Vec<u64> = c.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn remove_item_once_fails_for_absent_id() {
        let mut c = hero();
        c.assign_item(Item::new(1, "Ring", 5));
        assert_eq!(
            c.remove_item_once(9).unwrap_err(),
            DomainError::ItemNotOnCharacter
        );
        assert_eq!(c.items.len(), 1);
    }

    #[test]
    fn first_amulet_follows_assignment_order() {
        let mut c = hero();
        c.assign_item(Item::new(1, "Sword", 10));
        c.assign_item(Item::new(2, "Eye of Ra", 7).with_type("amulet"));
        c.assign_item(Item::new(3, "Scarab", 4).with_type("amulet"));

        assert_eq!(c.first_amulet().map(|i| i.id), Some(2));
    }

    #[test]
    fn first_amulet_is_none_without_amulets() {
        let mut c = hero();
        c.assign_item(Item::new(1, "Sword", 10));
        assert!(c.first_amulet().is_none());
    }
}
