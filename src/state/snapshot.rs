use crate::cooking::CookingSession;
use crate::favorites::FavoriteSet;
use crate::filter::{FilterCriteria, SearchQuery};
use crate::model::{Recipe, RecipeId, ShoppingItem};

/// Read-only view of a [`CatalogState`](super::CatalogState) for rendering.
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub query: &'a SearchQuery,
    pub criteria: &'a FilterCriteria,
    /// Recipes passing the current query and criteria, in catalog order
    pub recipes: Vec<&'a Recipe>,
    pub favorites: FavoriteSet,
    pub shopping: ShoppingView<'a>,
    pub selected: Option<SelectedRecipe<'a>>,
    pub cooking: Option<&'a CookingSession>,
}

impl Snapshot<'_> {
    pub fn is_favorite(&self, id: RecipeId) -> bool {
        self.favorites.contains(id)
    }
}

/// The shopping list split for display.
#[derive(Debug, Clone, Default)]
pub struct ShoppingView<'a> {
    pub unchecked: Vec<&'a ShoppingItem>,
    pub checked: Vec<&'a ShoppingItem>,
}

impl ShoppingView<'_> {
    pub fn total(&self) -> usize {
        self.unchecked.len() + self.checked.len()
    }

    pub fn completed(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// The recipe open in the detail view.
#[derive(Debug, Clone, Copy)]
pub struct SelectedRecipe<'a> {
    pub recipe: &'a Recipe,
    pub is_favorite: bool,
}
