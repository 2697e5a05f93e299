//! In-memory state storage modules.
//!
//! Stores own the data for one entity kind each:
//! - `ItemStore` - magic items
//! - `CharacterStore` - characters, plus item assignment (reads the
//!   `ItemStore` through an injected handle)
//!
//! Each store serializes its mutations behind a single `RwLock`; id
//! assignment and the append happen under one write-lock acquisition, so
//! ids stay strictly increasing under concurrent requests.

pub mod character;
pub mod item;

pub use character::{CharacterPatch, CharacterStore};
pub use item::{ItemPatch, ItemStore};
