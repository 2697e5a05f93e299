//! Item store.

use tokio::sync::RwLock;

use grimoire_domain::{DomainError, Item};

/// Fields to apply to an existing item. `None` leaves the current value.
#[derive(Debug, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub power: Option<i64>,
    pub item_type: Option<String>,
}

/// In-memory item collection with sequential id assignment.
///
/// Ids start at 1, only ever increase, and are never reused after a
/// delete. List order is insertion order.
pub struct ItemStore {
    inner: RwLock<Inner>,
}

struct Inner {
    items: Vec<Item>,
    next_id: u64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// All items, in insertion order.
    pub async fn list(&self) -> Vec<Item> {
        self.inner.read().await.items.clone()
    }

    pub async fn get(&self, id: u64) -> Result<Item, DomainError> {
        self.inner
            .read()
            .await
            .items
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(DomainError::ItemNotFound)
    }

    /// Assign the next id and append. Field presence is validated at the
    /// routing layer before this is called.
    pub async fn create(&self, name: String, power: i64, item_type: Option<String>) -> Item {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let mut item = Item::new(id, name, power);
        item.item_type = item_type;
        inner.items.push(item.clone());
        item
    }

    /// Overwrite only the fields present in the patch. A present empty
    /// string is applied; absence leaves the prior value.
    pub async fn update(&self, id: u64, patch: ItemPatch) -> Result<Item, DomainError> {
        let mut inner = self.inner.write().await;
        let item = inner
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(DomainError::ItemNotFound)?;

        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(power) = patch.power {
            item.power = power;
        }
        if let Some(item_type) = patch.item_type {
            item.item_type = Some(item_type);
        }
        Ok(item.clone())
    }

    /// Remove the item, preserving the order of the rest. The id is not
    /// reclaimed.
    pub async fn delete(&self, id: u64) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(DomainError::ItemNotFound)?;
        inner.items.remove(index);
        Ok(())
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_sequential_from_one() {
        let store = ItemStore::new();
        let a = store.create("Sword".into(), 10, None).await;
        let b = store.create("Shield".into(), 5, None).await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn ids_stay_monotonic_across_deletions() {
        let store = ItemStore::new();
        let a = store.create("Sword".into(), 10, None).await;
        store.delete(a.id).await.unwrap();
        let b = store.create("Shield".into(), 5, None).await;
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn delete_preserves_order_of_the_rest() {
        let store = ItemStore::new();
        for (name, power) in [("a", 1), ("b", 2), ("c", 3)] {
            store.create(name.into(), power, None).await;
        }
        store.delete(2).await.unwrap();
        let ids: Vec<u64> = store.list().await.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = ItemStore::new();
        assert_eq!(store.get(1).await.unwrap_err(), DomainError::ItemNotFound);
    }

    #[tokio::test]
    async fn update_applies_only_present_fields() {
        let store = ItemStore::new();
        let item = store.create("Sword".into(), 10, None).await;

        let updated = store
            .update(
                item.id,
                ItemPatch {
                    power: Some(12),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Sword");
        assert_eq!(updated.power, 12);
    }

    #[tokio::test]
    async fn update_applies_a_present_empty_string() {
        let store = ItemStore::new();
        let item = store.create("Sword".into(), 10, None).await;

        let updated = store
            .update(
                item.id,
                ItemPatch {
                    name: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "");
    }

    #[tokio::test]
    async fn update_missing_leaves_store_unchanged() {
        let store = ItemStore::new();
        store.create("Sword".into(), 10, None).await;
        let err = store
            .update(
                9,
                ItemPatch {
                    name: Some("x".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::ItemNotFound);
        assert_eq!(store.get(1).await.unwrap().name, "Sword");
    }

    #[tokio::test]
    async fn update_can_set_the_type() {
        let store = ItemStore::new();
        let item = store.create("Eye of Ra".into(), 7, None).await;
        let updated = store
            .update(
                item.id,
                ItemPatch {
                    item_type: Some("amulet".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(updated.is_amulet());
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = ItemStore::new();
        assert_eq!(store.delete(1).await.unwrap_err(), DomainError::ItemNotFound);
    }
}
