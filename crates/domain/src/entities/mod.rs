//! Entity modules.
//!
//! Plain data records for the two collections the API manages.

pub mod character;
pub mod item;

pub use character::Character;
pub use item::{Item, AMULET_TYPE};
