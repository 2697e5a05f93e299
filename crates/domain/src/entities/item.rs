//! Item entity - magic items that can be assigned to characters.

use serde::{Deserialize, Serialize};

/// Item type value recognized by the amulet lookup endpoint.
pub const AMULET_TYPE: &str = "amulet";

/// A magic item.
///
/// Data-carrying struct with no invariants to protect beyond the id,
/// which is assigned once by the store and never changed. An item copied
/// into a character's inventory keeps the field values it had at
/// assignment time; later edits to the store's record do not propagate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub power: i64,
    /// Free-form classification (e.g. "amulet", "weapon"). Never required.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub item_type: Option<String>,
}

impl Item {
    pub fn new(id: u64, name: impl Into<String>, power: i64) -> Self {
        Self {
            id,
            name: name.into(),
            power,
            item_type: None,
        }
    }

    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    /// Whether the amulet endpoint would return this item.
    pub fn is_amulet(&self) -> bool {
        self.item_type.as_deref() == Some(AMULET_TYPE)
    }
}
