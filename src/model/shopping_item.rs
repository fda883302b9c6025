use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a shopping item, unique across everything a list ever created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingItemId(pub u64);

impl fmt::Display for ShoppingItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry on the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ShoppingItemId,
    pub name: String,
    pub checked: bool,
}

impl ShoppingItem {
    pub(crate) fn new(id: ShoppingItemId, name: String) -> Self {
        ShoppingItem {
            id,
            name,
            checked: false,
        }
    }
}
