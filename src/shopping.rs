//! The shopping list.
//!
//! Items are kept in insertion order and deduplicated by exact name when they
//! are added. Ids come from a counter owned by the list, so an id is never
//! handed out twice even after the item holding it was removed.

use crate::model::{ShoppingItem, ShoppingItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised when a stored shopping list breaks its invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShoppingListError {
    #[error("Duplicate shopping item name: {0}")]
    DuplicateName(String),

    #[error("Duplicate shopping item id: {0}")]
    DuplicateId(ShoppingItemId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawShoppingList")]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    next_id: u64,
}

#[derive(Deserialize)]
struct RawShoppingList {
    items: Vec<ShoppingItem>,
    #[serde(default)]
    next_id: u64,
}

impl TryFrom<RawShoppingList> for ShoppingList {
    type Error = ShoppingListError;

    /// Rejects repeated names or ids and moves the counter past every stored id.
    fn try_from(raw: RawShoppingList) -> Result<Self, Self::Error> {
        let mut names = HashSet::new();
        let mut ids = HashSet::new();
        for item in &raw.items {
            if !names.insert(item.name.as_str()) {
                return Err(ShoppingListError::DuplicateName(item.name.clone()));
            }
            if !ids.insert(item.id) {
                return Err(ShoppingListError::DuplicateId(item.id));
            }
        }

        let highest = raw.items.iter().map(|item| item.id.0).max().unwrap_or(0);
        Ok(ShoppingList {
            next_id: raw.next_id.max(highest),
            items: raw.items,
        })
    }
}

impl ShoppingList {
    pub fn new() -> Self {
        ShoppingList::default()
    }

    /// Appends one unchecked item per name not already on the list.
    ///
    /// Names are compared exactly, including case. Duplicates inside `names`
    /// are collapsed to their first occurrence. Returns the ids of the items
    /// that were added, in input order.
    pub fn add_ingredients<I, S>(&mut self, names: I) -> Vec<ShoppingItemId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut present: HashSet<String> = self.items.iter().map(|i| i.name.clone()).collect();
        let mut added = Vec::new();

        for name in names {
            let name = name.into();
            if present.contains(&name) {
                continue;
            }
            let id = self.allocate_id();
            present.insert(name.clone());
            self.items.push(ShoppingItem::new(id, name));
            added.push(id);
        }

        added
    }

    /// Flips the checked flag of `id`. Returns false if there is no such item.
    pub fn toggle(&mut self, id: ShoppingItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    /// Removes the item with `id`, if any, and returns it.
    pub fn remove(&mut self, id: ShoppingItemId) -> Option<ShoppingItem> {
        let position = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(position))
    }

    pub fn get(&self, id: ShoppingItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Items still to buy, in list order.
    pub fn unchecked(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter().filter(|item| !item.checked)
    }

    /// Items already bought, in list order.
    pub fn checked(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter().filter(|item| item.checked)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed(&self) -> usize {
        self.checked().count()
    }

    fn allocate_id(&mut self) -> ShoppingItemId {
        self.next_id += 1;
        ShoppingItemId(self.next_id)
    }
}
