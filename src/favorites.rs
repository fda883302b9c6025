//! Bookmarked recipes.

use crate::model::RecipeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Set of favorite recipe ids.
///
/// The set is shared copy-on-write: cloning is cheap, and a toggle on one
/// clone never shows up in another. Ids are not checked against any catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSet {
    ids: Arc<BTreeSet<RecipeId>>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        FavoriteSet::default()
    }

    /// Returns a new set with `id` added if it was absent, or removed if it
    /// was present. `self` is left untouched.
    pub fn toggled(&self, id: RecipeId) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    /// Flips membership of `id` in place and returns whether it is now a favorite.
    pub fn toggle(&mut self, id: RecipeId) -> bool {
        let ids = Arc::make_mut(&mut self.ids);
        if ids.remove(&id) {
            false
        } else {
            ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorite ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = RecipeId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<RecipeId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = RecipeId>>(iter: I) -> Self {
        FavoriteSet {
            ids: Arc::new(iter.into_iter().collect()),
        }
    }
}
