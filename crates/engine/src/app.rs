//! Application state and composition.

use std::sync::Arc;

use crate::stores::{CharacterStore, ItemStore};

/// Main application state.
///
/// Owns both stores and is passed to HTTP handlers via axum state. The
/// character store receives its item store handle here, at composition
/// time; nothing else shares mutable state.
pub struct App {
    pub items: Arc<ItemStore>,
    pub characters: Arc<CharacterStore>,
}

impl App {
    /// Create a new App with empty stores.
    pub fn new() -> Self {
        let items = Arc::new(ItemStore::new());
        let characters = Arc::new(CharacterStore::new(items.clone()));
        Self { items, characters }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
