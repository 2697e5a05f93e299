//! Character store.

use std::sync::Arc;

use tokio::sync::RwLock;

use grimoire_domain::{Character, DomainError, Item};

use crate::stores::ItemStore;

/// Fields to apply to an existing character. `None` leaves the current
/// value.
#[derive(Debug, Default)]
pub struct CharacterPatch {
    pub name: Option<String>,
    pub class_name: Option<String>,
    pub level: Option<i64>,
}

/// In-memory character collection with sequential id assignment.
///
/// Holds the only handle it needs to the item store; item assignment
/// copies the item record by value, so a character's inventory can
/// diverge from the item store after later edits or deletes. That
/// staleness is a documented limitation of the API, not an accident of
/// this implementation.
pub struct CharacterStore {
    inner: RwLock<Inner>,
    items: Arc<ItemStore>,
}

struct Inner {
    characters: Vec<Character>,
    next_id: u64,
}

impl CharacterStore {
    pub fn new(items: Arc<ItemStore>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                characters: Vec::new(),
                next_id: 1,
            }),
            items,
        }
    }

    /// All characters, in insertion order.
    pub async fn list(&self) -> Vec<Character> {
        self.inner.read().await.characters.clone()
    }

    pub async fn get(&self, id: u64) -> Result<Character, DomainError> {
        self.inner
            .read()
            .await
            .characters
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(DomainError::CharacterNotFound)
    }

    /// Assign the next id and append with an empty inventory.
    pub async fn create(&self, name: String, class_name: String, level: i64) -> Character {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let character = Character::new(id, name, class_name, level);
        inner.characters.push(character.clone());
        character
    }

    /// Overwrite only the fields present in the patch.
    pub async fn update(&self, id: u64, patch: CharacterPatch) -> Result<Character, DomainError> {
        let mut inner = self.inner.write().await;
        let character = inner
            .characters
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DomainError::CharacterNotFound)?;

        if let Some(name) = patch.name {
            character.name = name;
        }
        if let Some(class_name) = patch.class_name {
            character.class_name = class_name;
        }
        if let Some(level) = patch.level {
            character.level = level;
        }
        Ok(character.clone())
    }

    /// Remove the character, preserving the order of the rest.
    pub async fn delete(&self, id: u64) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .characters
            .iter()
            .position(|c| c.id == id)
            .ok_or(DomainError::CharacterNotFound)?;
        inner.characters.remove(index);
        Ok(())
    }

    /// Append a copy of the item to the character's inventory.
    ///
    /// An absent character takes precedence over an absent item in the
    /// error reported. The item is snapshotted from the item store before
    /// the character write lock is taken; the two locks are never held at
    /// once.
    pub async fn assign_item(
        &self,
        character_id: u64,
        item_id: u64,
    ) -> Result<Character, DomainError> {
        {
            let inner = self.inner.read().await;
            if !inner.characters.iter().any(|c| c.id == character_id) {
                return Err(DomainError::CharacterNotFound);
            }
        }

        let item = self.items.get(item_id).await?;

        let mut inner = self.inner.write().await;
        let character = inner
            .characters
            .iter_mut()
            .find(|c| c.id == character_id)
            .ok_or(DomainError::CharacterNotFound)?;
        character.assign_item(item);
        Ok(character.clone())
    }

    /// Remove the first matching inventory entry.
    pub async fn remove_item(
        &self,
        character_id: u64,
        item_id: u64,
    ) -> Result<Character, DomainError> {
        let mut inner = self.inner.write().await;
        let character = inner
            .characters
            .iter_mut()
            .find(|c| c.id == character_id)
            .ok_or(DomainError::CharacterNotFound)?;
        character.remove_item_once(item_id)?;
        Ok(character.clone())
    }

    /// The character's inventory, in assignment order.
    pub async fn list_items(&self, character_id: u64) -> Result<Vec<Item>, DomainError> {
        let inner = self.inner.read().await;
        let character = inner
            .characters
            .iter()
            .find(|c| c.id == character_id)
            .ok_or(DomainError::CharacterNotFound)?;
        Ok(character.items.clone())
    }

    /// First item of type "amulet" in the character's inventory.
    pub async fn find_amulet(&self, character_id: u64) -> Result<Item, DomainError> {
        let inner = self.inner.read().await;
        let character = inner
            .characters
            .iter()
            .find(|c| c.id == character_id)
            .ok_or(DomainError::CharacterNotFound)?;
        character
            .first_amulet()
            .cloned()
            .ok_or(DomainError::AmuletNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn stores() -> (Arc<ItemStore>, CharacterStore) {
        let items = Arc::new(ItemStore::new());
        let characters = CharacterStore::new(items.clone());
        (items, characters)
    }

    #[tokio::test]
    async fn create_starts_with_an_empty_inventory() {
        let (_, characters) = stores().await;
        let hero = characters.create("Hero".into(), "Warrior".into(), 1).await;
        assert_eq!(hero.id, 1);
        assert!(hero.items.is_empty());
    }

    #[tokio::test]
    async fn ids_stay_monotonic_across_deletions() {
        let (_, characters) = stores().await;
        let a = characters.create("A".into(), "Mage".into(), 1).await;
        characters.delete(a.id).await.unwrap();
        let b = characters.create("B".into(), "Mage".into(), 1).await;
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn assign_appends_a_copy_of_the_item() {
        let (items, characters) = stores().await;
        let sword = items.create("Sword".into(), 10, None).await;
        let hero = characters.create("Hero".into(), "Warrior".into(), 1).await;

        let updated = characters.assign_item(hero.id, sword.id).await.unwrap();
        assert_eq!(updated.items, vec![sword]);
    }

    #[tokio::test]
    async fn assign_permits_duplicates() {
        let (items, characters) = stores().await;
        let sword = items.create("Sword".into(), 10, None).await;
        let hero = characters.create("Hero".into(), "Warrior".into(), 1).await;

        characters.assign_item(hero.id, sword.id).await.unwrap();
        let updated = characters.assign_item(hero.id, sword.id).await.unwrap();
        assert_eq!(updated.items.len(), 2);
    }

    #[tokio::test]
    async fn assign_reports_the_character_before_the_item() {
        let (_, characters) = stores().await;
        // Neither exists; the character error wins.
        assert_eq!(
            characters.assign_item(1, 1).await.unwrap_err(),
            DomainError::CharacterNotFound
        );
    }

    #[tokio::test]
    async fn assign_missing_item_is_item_not_found() {
        let (_, characters) = stores().await;
        let hero = characters.create("Hero".into(), "Warrior".into(), 1).await;
        assert_eq!(
            characters.assign_item(hero.id, 9).await.unwrap_err(),
            DomainError::ItemNotFound
        );
    }

    #[tokio::test]
    async fn deleting_the_source_item_does_not_cascade() {
        let (items, characters) = stores().await;
        let sword = items.create("Sword".into(), 10, None).await;
        let hero = characters.create("Hero".into(), "Warrior".into(), 1).await;
        characters.assign_item(hero.id, sword.id).await.unwrap();

        items.delete(sword.id).await.unwrap();

        let inventory = characters.list_items(hero.id).await.unwrap();
        assert_eq!(inventory, vec![sword]);
    }

    #[tokio::test]
    async fn remove_item_removes_the_first_occurrence_only() {
        let (items, characters) = stores().await;
        let sword = items.create("Sword".into(), 10, None).await;
        let hero = characters.create("Hero".into(), "Warrior".into(), 1).await;
        characters.assign_item(hero.id, sword.id).await.unwrap();
        characters.assign_item(hero.id, sword.id).await.unwrap();

        let updated = characters.remove_item(hero.id, sword.id).await.unwrap();
        assert_eq!(updated.items.len(), 1);
    }

    #[tokio::test]
    async fn remove_absent_item_leaves_the_character_unchanged() {
        let (items, characters) = stores().await;
        let sword = items.create("Sword".into(), 10, None).await;
        let hero = characters.create("Hero".into(), "Warrior".into(), 1).await;
        characters.assign_item(hero.id, sword.id).await.unwrap();

        assert_eq!(
            characters.remove_item(hero.id, 9).await.unwrap_err(),
            DomainError::ItemNotOnCharacter
        );
        assert_eq!(characters.list_items(hero.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_amulet_returns_the_first_by_assignment_order() {
        let (items, characters) = stores().await;
        let sword = items.create("Sword".into(), 10, None).await;
        let eye = items
            .create("Eye of Ra".into(), 7, Some("amulet".into()))
            .await;
        let scarab = items
            .create("Scarab".into(), 4, Some("amulet".into()))
            .await;
        let hero = characters.create("Hero".into(), "Warrior".into(), 1).await;

        for item in [&sword, &eye, &scarab] {
            characters.assign_item(hero.id, item.id).await.unwrap();
        }

        assert_eq!(characters.find_amulet(hero.id).await.unwrap(), eye);
    }

    #[tokio::test]
    async fn find_amulet_without_one_is_a_distinct_not_found() {
        let (items, characters) = stores().await;
        let sword = items.create("Sword".into(), 10, None).await;
        let hero = characters.create("Hero".into(), "Warrior".into(), 1).await;
        characters.assign_item(hero.id, sword.id).await.unwrap();

        assert_eq!(
            characters.find_amulet(hero.id).await.unwrap_err(),
            DomainError::AmuletNotFound
        );
    }

    #[tokio::test]
    async fn list_items_missing_character_is_not_found() {
        let (_, characters) = stores().await;
        assert_eq!(
            characters.list_items(1).await.unwrap_err(),
            DomainError::CharacterNotFound
        );
    }
}
