//! The catalog state engine.
//!
//! [`CatalogState`] owns everything the browsing UI needs: the shared catalog,
//! the current search and filters, favorites, the shopping list, the open
//! recipe and an optional cooking session. Every [`Command`] is one atomic
//! transition; [`CatalogState::apply`] runs it and returns the next state.
//!
//! The filtered view is pulled, not cached: [`CatalogState::filtered_view`]
//! recomputes it from the catalog, query and criteria on each call.

use crate::catalog::Catalog;
use crate::cooking::CookingSession;
use crate::favorites::FavoriteSet;
use crate::filter::{self, FilterCriteria, SearchQuery};
use crate::model::{Recipe, RecipeId, ShoppingItemId};
use crate::shopping::ShoppingList;
use tracing::{debug, warn};

mod snapshot;

pub use snapshot::{SelectedRecipe, ShoppingView, Snapshot};

/// A user-triggered state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetSearchQuery(SearchQuery),
    /// Replaces the whole criteria record
    SetFilterCriteria(FilterCriteria),
    ToggleFavorite(RecipeId),
    AddIngredients(Vec<String>),
    ToggleShoppingItem(ShoppingItemId),
    RemoveShoppingItem(ShoppingItemId),
    SelectRecipe(RecipeId),
    CloseRecipe,
    AddSelectedToShoppingList,
    StartCooking,
    NextStep,
    PreviousStep,
    StopCooking,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Catalog,
    query: SearchQuery,
    criteria: FilterCriteria,
    favorites: FavoriteSet,
    shopping: ShoppingList,
    selected: Option<RecipeId>,
    cooking: Option<CookingSession>,
}

impl CatalogState {
    /// Starts a session over `catalog` with no search, no filters, no
    /// favorites and an empty shopping list.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog,
            ..Default::default()
        }
    }

    /// Runs `command` and returns the resulting state.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_shelf::{Catalog, CatalogState, Command, SourceFormat};
    ///
    /// let catalog = Catalog::parse(
    ///     "[{id: 1, title: Pasta Bake, cuisine: Italian}, {id: 2, title: Salad, cuisine: Greek}]",
    ///     SourceFormat::Yaml,
    /// )?;
    /// let state = CatalogState::new(catalog)
    ///     .apply(Command::SetSearchQuery("pasta".into()))
    ///     .apply(Command::AddIngredients(vec!["Egg".into(), "Milk".into(), "Egg".into()]));
    ///
    /// assert_eq!(state.filtered_view().len(), 1);
    /// assert_eq!(state.shopping_list().len(), 2);
    /// # Ok::<(), recipe_shelf::CatalogError>(())
    /// ```
    #[must_use]
    pub fn apply(mut self, command: Command) -> Self {
        self.dispatch(command);
        self
    }

    /// Runs `command` in place.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::SetSearchQuery(query) => self.set_search_query(query),
            Command::SetFilterCriteria(criteria) => self.set_filter_criteria(criteria),
            Command::ToggleFavorite(id) => {
                self.toggle_favorite(id);
            }
            Command::AddIngredients(names) => {
                self.add_ingredients_to_shopping_list(names);
            }
            Command::ToggleShoppingItem(id) => {
                self.toggle_shopping_item(id);
            }
            Command::RemoveShoppingItem(id) => {
                self.remove_shopping_item(id);
            }
            Command::SelectRecipe(id) => {
                self.select_recipe(id);
            }
            Command::CloseRecipe => self.close_recipe(),
            Command::AddSelectedToShoppingList => {
                self.add_selected_to_shopping_list();
            }
            Command::StartCooking => {
                self.start_cooking();
            }
            Command::NextStep => {
                self.next_step();
            }
            Command::PreviousStep => {
                self.previous_step();
            }
            Command::StopCooking => self.stop_cooking(),
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<SearchQuery>) {
        self.query = query.into();
        debug!(query = self.query.as_str(), "search query changed");
    }

    pub fn set_filter_criteria(&mut self, criteria: FilterCriteria) {
        debug!(?criteria, "filter criteria replaced");
        self.criteria = criteria;
    }

    /// Flips favorite membership and returns whether `id` is now a favorite.
    pub fn toggle_favorite(&mut self, id: RecipeId) -> bool {
        let now_favorite = self.favorites.toggle(id);
        debug!(%id, now_favorite, "favorite toggled");
        now_favorite
    }

    /// Adds every name not yet on the shopping list and returns the new ids.
    pub fn add_ingredients_to_shopping_list<I, S>(&mut self, names: I) -> Vec<ShoppingItemId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let added = self.shopping.add_ingredients(names);
        debug!(added = added.len(), total = self.shopping.len(), "ingredients added");
        added
    }

    /// Flips the checked flag. Returns false if `id` is not on the list.
    pub fn toggle_shopping_item(&mut self, id: ShoppingItemId) -> bool {
        let found = self.shopping.toggle(id);
        if !found {
            debug!(%id, "toggle ignored, shopping item not found");
        }
        found
    }

    /// Removes an item. Returns false if `id` is not on the list.
    pub fn remove_shopping_item(&mut self, id: ShoppingItemId) -> bool {
        let removed = self.shopping.remove(id).is_some();
        if !removed {
            debug!(%id, "remove ignored, shopping item not found");
        }
        removed
    }

    /// Opens the detail view for `id`. Unknown ids leave the selection as is.
    pub fn select_recipe(&mut self, id: RecipeId) -> bool {
        if !self.catalog.contains(id) {
            warn!(%id, "cannot select recipe missing from catalog");
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn close_recipe(&mut self) {
        self.selected = None;
    }

    /// Adds the open recipe's ingredients to the shopping list.
    pub fn add_selected_to_shopping_list(&mut self) -> Vec<ShoppingItemId> {
        let Some(recipe) = self.selected_recipe() else {
            return Vec::new();
        };
        let names = recipe.ingredients.clone();
        self.add_ingredients_to_shopping_list(names)
    }

    /// Moves the open recipe into cooking mode and closes the detail view.
    /// Returns false if no recipe is open.
    pub fn start_cooking(&mut self) -> bool {
        let Some(recipe) = self.selected_recipe().cloned() else {
            return false;
        };
        debug!(id = %recipe.id, steps = recipe.instructions.len(), "cooking started");
        self.cooking = Some(CookingSession::new(recipe));
        self.selected = None;
        true
    }

    pub fn next_step(&mut self) -> bool {
        self.cooking.as_mut().is_some_and(CookingSession::next)
    }

    pub fn previous_step(&mut self) -> bool {
        self.cooking.as_mut().is_some_and(CookingSession::previous)
    }

    pub fn stop_cooking(&mut self) {
        self.cooking = None;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search_query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn filter_criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, id: RecipeId) -> bool {
        self.favorites.contains(id)
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.shopping
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.selected.and_then(|id| self.catalog.get(id))
    }

    pub fn cooking(&self) -> Option<&CookingSession> {
        self.cooking.as_ref()
    }

    /// Recipes matching the current query and criteria, in catalog order.
    pub fn filtered_view(&self) -> Vec<&Recipe> {
        filter::filtered_view(self.catalog.recipes(), &self.query, &self.criteria)
    }

    /// Everything the presentation layer needs to render the current state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            query: &self.query,
            criteria: &self.criteria,
            recipes: self.filtered_view(),
            favorites: self.favorites.clone(),
            shopping: ShoppingView {
                unchecked: self.shopping.unchecked().collect(),
                checked: self.shopping.checked().collect(),
            },
            selected: self.selected_recipe().map(|recipe| SelectedRecipe {
                recipe,
                is_favorite: self.favorites.contains(recipe.id),
            }),
            cooking: self.cooking.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SourceFormat;
    use crate::filter::TimeBucket;
    use indoc::indoc;

    fn state() -> CatalogState {
        let catalog = Catalog::parse(
            indoc! {r#"
                - id: 1
                  title: Pasta Bake
                  ingredients: [Pasta, Cheese, Tomato]
                  cuisine: Italian
                  diet: [Vegetarian]
                  difficulty: Medium
                  cookTime: 45
                  instructions: [Boil pasta, Mix with sauce, Bake]
                - id: 2
                  title: Salad
                  ingredients: [Lettuce, Tomato, Feta]
                  cuisine: Greek
                  diet: [Vegetarian]
                  difficulty: Easy
                  cookTime: 10
                "#},
            SourceFormat::Yaml,
        )
        .unwrap();
        CatalogState::new(catalog)
    }

    fn view_ids(state: &CatalogState) -> Vec<u64> {
        state.filtered_view().iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn test_initial_view_is_full_catalog() {
        assert_eq!(view_ids(&state()), vec![1, 2]);
    }

    #[test]
    fn test_search_scenario() {
        let state = state().apply(Command::SetSearchQuery("pasta".into()));
        assert_eq!(view_ids(&state), vec![1]);
    }

    #[test]
    fn test_time_filter_scenario() {
        let state = state().apply(Command::SetFilterCriteria(
            FilterCriteria::default().with_time(TimeBucket::Quick),
        ));
        assert_eq!(view_ids(&state), vec![2]);
    }

    #[test]
    fn test_empty_criteria_axis_keeps_everything() {
        let state = state()
            .apply(Command::SetFilterCriteria(
                FilterCriteria::default().with_cuisine(""),
            ))
            .apply(Command::SetFilterCriteria(FilterCriteria {
                difficulty: Some(String::new()),
                ..FilterCriteria::default()
            }));
        assert_eq!(view_ids(&state), vec![1, 2]);
    }

    #[test]
    fn test_filter_criteria_replaced_not_merged() {
        let state = state()
            .apply(Command::SetFilterCriteria(
                FilterCriteria::default().with_cuisine("Greek"),
            ))
            .apply(Command::SetFilterCriteria(
                FilterCriteria::default().with_difficulty("Medium"),
            ));
        assert!(state.filter_criteria().cuisine.is_none());
        assert_eq!(view_ids(&state), vec![1]);
    }

    #[test]
    fn test_view_reflects_latest_query() {
        let mut state = state();
        state.set_search_query("salad");
        state.set_search_query("");
        assert_eq!(view_ids(&state), vec![1, 2]);
    }

    #[test]
    fn test_favorites_survive_filter_changes() {
        let state = state()
            .apply(Command::ToggleFavorite(RecipeId(2)))
            .apply(Command::SetSearchQuery("pasta".into()));

        assert!(state.is_favorite(RecipeId(2)));
        assert_eq!(view_ids(&state), vec![1]);
    }

    #[test]
    fn test_toggle_favorite_involution() {
        let before = state().apply(Command::ToggleFavorite(RecipeId(1)));
        let after = before
            .clone()
            .apply(Command::ToggleFavorite(RecipeId(77)))
            .apply(Command::ToggleFavorite(RecipeId(77)));
        assert_eq!(before.favorites(), after.favorites());
    }

    #[test]
    fn test_shopping_commands() {
        let mut state = state().apply(Command::AddIngredients(vec![
            "Egg".to_string(),
            "Milk".to_string(),
            "Egg".to_string(),
        ]));
        let items = state.shopping_list().items().to_vec();
        assert_eq!(items.len(), 2);

        assert!(state.toggle_shopping_item(items[1].id));
        assert!(!state.toggle_shopping_item(ShoppingItemId(999)));
        assert!(!state.remove_shopping_item(ShoppingItemId(999)));
        assert!(state.remove_shopping_item(items[0].id));

        let names: Vec<&str> = state
            .shopping_list()
            .items()
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Milk"]);
        assert!(state.shopping_list().items()[0].checked);
    }

    #[test]
    fn test_select_unknown_recipe_keeps_selection() {
        let mut state = state();
        assert!(state.select_recipe(RecipeId(1)));
        assert!(!state.select_recipe(RecipeId(99)));
        assert_eq!(state.selected_recipe().unwrap().id, RecipeId(1));
    }

    #[test]
    fn test_selection_survives_search() {
        let state = state()
            .apply(Command::SelectRecipe(RecipeId(2)))
            .apply(Command::SetSearchQuery("pasta".into()));
        assert_eq!(state.selected_recipe().unwrap().title, "Salad");
    }

    #[test]
    fn test_add_selected_to_shopping_list() {
        let state = state()
            .apply(Command::SelectRecipe(RecipeId(1)))
            .apply(Command::AddSelectedToShoppingList)
            .apply(Command::SelectRecipe(RecipeId(2)))
            .apply(Command::AddSelectedToShoppingList);

        let names: Vec<&str> = state
            .shopping_list()
            .items()
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Pasta", "Cheese", "Tomato", "Lettuce", "Feta"]);
    }

    #[test]
    fn test_add_selected_without_selection() {
        let mut state = state();
        assert!(state.add_selected_to_shopping_list().is_empty());
        assert!(state.shopping_list().is_empty());
    }

    #[test]
    fn test_cooking_flow() {
        let mut state = state().apply(Command::SelectRecipe(RecipeId(1)));
        assert!(state.start_cooking());
        assert!(state.selected_recipe().is_none());

        assert!(state.next_step());
        assert!(state.next_step());
        assert!(!state.next_step());
        assert_eq!(
            state.cooking().unwrap().current_instruction(),
            Some("Bake")
        );
        assert!(state.previous_step());

        let state = state.apply(Command::StopCooking);
        assert!(state.cooking().is_none());
        assert!(!state.clone().start_cooking());
    }

    #[test]
    fn test_steps_without_session() {
        let mut state = state();
        assert!(!state.next_step());
        assert!(!state.previous_step());
    }

    #[test]
    fn test_snapshot() {
        let mut state = state()
            .apply(Command::ToggleFavorite(RecipeId(1)))
            .apply(Command::SelectRecipe(RecipeId(1)))
            .apply(Command::SetSearchQuery("tomato".into()));
        let ids = state.add_ingredients_to_shopping_list(["Salt", "Pepper", "Oil"]);
        state.toggle_shopping_item(ids[1]);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.recipes.len(), 2);
        assert!(snapshot.is_favorite(RecipeId(1)));
        assert!(!snapshot.is_favorite(RecipeId(2)));
        assert_eq!(snapshot.shopping.total(), 3);
        assert_eq!(snapshot.shopping.completed(), 1);
        assert_eq!(snapshot.shopping.unchecked[1].name, "Oil");
        assert_eq!(snapshot.shopping.checked[0].name, "Pepper");

        let selected = snapshot.selected.unwrap();
        assert!(selected.is_favorite);
        assert_eq!(selected.recipe.id, RecipeId(1));
        assert!(snapshot.cooking.is_none());
    }

    #[test]
    fn test_snapshot_keeps_favorites_after_later_toggle() {
        let mut state = state().apply(Command::ToggleFavorite(RecipeId(1)));
        let favorites = state.snapshot().favorites;
        state.toggle_favorite(RecipeId(1));

        assert!(favorites.contains(RecipeId(1)));
        assert!(!state.is_favorite(RecipeId(1)));
    }
}
