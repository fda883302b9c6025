//! UniFFI bindings for the presentation layer (iOS, Android, web shells).
//!
//! Foreign callers hold a [`CatalogSession`] and drive it through the same
//! commands as [`CatalogState`]. Records here are plain copies of engine data,
//! since borrowed snapshots cannot cross the FFI boundary.

use crate::catalog::{load_catalog, Catalog, CatalogError, SourceFormat};
use crate::cooking::CookingSession;
use crate::filter::{FilterCriteria, FilterError, TimeBucket};
use crate::model::{Recipe, RecipeId, ShoppingItem, ShoppingItemId};
use crate::state::CatalogState;
use camino::Utf8Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum CatalogSessionError {
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    #[error("Invalid filter: {message}")]
    Filter { message: String },

    #[error("Unsupported catalog format: {message}")]
    UnsupportedFormat { message: String },
}

impl From<CatalogError> for CatalogSessionError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::UnsupportedFormat(path) => CatalogSessionError::UnsupportedFormat {
                message: path.to_string(),
            },
            other => CatalogSessionError::Catalog {
                message: other.to_string(),
            },
        }
    }
}

impl From<FilterError> for CatalogSessionError {
    fn from(e: FilterError) -> Self {
        CatalogSessionError::Filter {
            message: e.to_string(),
        }
    }
}

/// FFI-safe copy of a recipe, with its favorite flag resolved.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub cuisine: String,
    pub diet: Vec<String>,
    pub difficulty: String,
    /// Minutes
    pub cook_time: u32,
    pub servings: u32,
    pub rating: f64,
    pub tags: Vec<String>,
    pub instructions: Vec<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub is_favorite: bool,
}

impl FfiRecipe {
    fn new(recipe: &Recipe, is_favorite: bool) -> Self {
        FfiRecipe {
            id: recipe.id.0,
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.clone(),
            cuisine: recipe.cuisine.clone(),
            diet: recipe.diet.clone(),
            difficulty: recipe.difficulty.clone(),
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            rating: recipe.rating,
            tags: recipe.tags.clone(),
            instructions: recipe.instructions.clone(),
            image: recipe.image.clone(),
            category: recipe.category.clone(),
            is_favorite,
        }
    }
}

/// Filter panel values. Empty strings and `None` both mean "any".
#[derive(Debug, Clone, Default, uniffi::Record)]
pub struct FfiFilterCriteria {
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    pub difficulty: Option<String>,
    /// One of `quick`, `medium` or `long`
    pub time: Option<String>,
}

impl TryFrom<FfiFilterCriteria> for FilterCriteria {
    type Error = FilterError;

    fn try_from(c: FfiFilterCriteria) -> Result<Self, Self::Error> {
        FilterCriteria::from_raw(
            c.cuisine.as_deref(),
            c.diet.as_deref(),
            c.difficulty.as_deref(),
            c.time.as_deref(),
        )
    }
}

impl From<&FilterCriteria> for FfiFilterCriteria {
    fn from(c: &FilterCriteria) -> Self {
        FfiFilterCriteria {
            cuisine: c.cuisine.clone(),
            diet: c.diet.clone(),
            difficulty: c.difficulty.clone(),
            time: c.time.map(|t| t.key().to_string()),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiShoppingItem {
    pub id: u64,
    pub name: String,
    pub checked: bool,
}

impl From<&ShoppingItem> for FfiShoppingItem {
    fn from(item: &ShoppingItem) -> Self {
        FfiShoppingItem {
            id: item.id.0,
            name: item.name.clone(),
            checked: item.checked,
        }
    }
}

/// The shopping list split into "to buy" and "completed".
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiShoppingList {
    pub unchecked: Vec<FfiShoppingItem>,
    pub checked: Vec<FfiShoppingItem>,
    pub total: u32,
    pub completed: u32,
}

/// Current position in cooking mode.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCookingStep {
    pub recipe_id: u64,
    pub title: String,
    /// Zero-based
    pub step: u32,
    pub total_steps: u32,
    pub instruction: Option<String>,
    pub progress: f64,
    pub is_first: bool,
    pub is_last: bool,
}

impl From<&CookingSession> for FfiCookingStep {
    fn from(session: &CookingSession) -> Self {
        FfiCookingStep {
            recipe_id: session.recipe().id.0,
            title: session.recipe().title.clone(),
            step: session.step() as u32,
            total_steps: session.total_steps() as u32,
            instruction: session.current_instruction().map(|s| s.to_string()),
            progress: session.progress(),
            is_first: session.is_first(),
            is_last: session.is_last(),
        }
    }
}

/// Distinct values available to a filter panel.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFacets {
    pub cuisines: Vec<String>,
    pub diets: Vec<String>,
    pub difficulties: Vec<String>,
    pub time_buckets: Vec<String>,
}

/// A browsing session over one catalog.
#[derive(uniffi::Object)]
pub struct CatalogSession {
    state: Mutex<CatalogState>,
}

impl CatalogSession {
    fn new(catalog: Catalog) -> Arc<Self> {
        Arc::new(CatalogSession {
            state: Mutex::new(CatalogState::new(catalog)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl CatalogSession {
    /// Creates a session from catalog content.
    ///
    /// # Arguments
    /// * `content` - A YAML or JSON catalog document
    /// * `format` - `yaml`, `yml` or `json`
    #[uniffi::constructor]
    pub fn from_content(
        content: String,
        format: String,
    ) -> Result<Arc<Self>, CatalogSessionError> {
        let format = SourceFormat::from_extension(&format)
            .ok_or(CatalogSessionError::UnsupportedFormat { message: format })?;
        let catalog = Catalog::parse(&content, format)?;
        Ok(CatalogSession::new(catalog))
    }

    /// Creates a session from a catalog file or a directory of catalog files.
    #[uniffi::constructor]
    pub fn from_path(path: String) -> Result<Arc<Self>, CatalogSessionError> {
        let catalog = load_catalog(Utf8Path::new(&path))?;
        Ok(CatalogSession::new(catalog))
    }

    pub fn set_search_query(&self, query: String) {
        self.lock().set_search_query(query);
    }

    pub fn search_query(&self) -> String {
        self.lock().search_query().as_str().to_string()
    }

    /// Replaces the filter criteria. Unknown time buckets are rejected and
    /// leave the current criteria in place.
    pub fn set_filter_criteria(
        &self,
        criteria: FfiFilterCriteria,
    ) -> Result<(), CatalogSessionError> {
        let criteria = FilterCriteria::try_from(criteria)?;
        self.lock().set_filter_criteria(criteria);
        Ok(())
    }

    pub fn filter_criteria(&self) -> FfiFilterCriteria {
        FfiFilterCriteria::from(self.lock().filter_criteria())
    }

    /// Recipes matching the current search and filters, in catalog order.
    pub fn filtered_recipes(&self) -> Vec<FfiRecipe> {
        let state = self.lock();
        state
            .filtered_view()
            .into_iter()
            .map(|r| FfiRecipe::new(r, state.is_favorite(r.id)))
            .collect()
    }

    pub fn recipe(&self, id: u64) -> Option<FfiRecipe> {
        let state = self.lock();
        let id = RecipeId(id);
        state
            .catalog()
            .get(id)
            .map(|r| FfiRecipe::new(r, state.is_favorite(id)))
    }

    pub fn facets(&self) -> FfiFacets {
        let state = self.lock();
        let catalog = state.catalog();
        FfiFacets {
            cuisines: to_owned(catalog.cuisines()),
            diets: to_owned(catalog.diets()),
            difficulties: to_owned(catalog.difficulties()),
            time_buckets: TimeBucket::ALL
                .iter()
                .map(|t| t.key().to_string())
                .collect(),
        }
    }

    /// Returns true if the recipe is now a favorite.
    pub fn toggle_favorite(&self, id: u64) -> bool {
        self.lock().toggle_favorite(RecipeId(id))
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.lock().is_favorite(RecipeId(id))
    }

    pub fn favorite_ids(&self) -> Vec<u64> {
        self.lock().favorites().iter().map(|id| id.0).collect()
    }

    /// Returns the ids of the items actually added.
    pub fn add_ingredients(&self, names: Vec<String>) -> Vec<u64> {
        self.lock()
            .add_ingredients_to_shopping_list(names)
            .into_iter()
            .map(|id| id.0)
            .collect()
    }

    pub fn toggle_shopping_item(&self, id: u64) -> bool {
        self.lock().toggle_shopping_item(ShoppingItemId(id))
    }

    pub fn remove_shopping_item(&self, id: u64) -> bool {
        self.lock().remove_shopping_item(ShoppingItemId(id))
    }

    pub fn shopping_list(&self) -> FfiShoppingList {
        let state = self.lock();
        let list = state.shopping_list();
        FfiShoppingList {
            unchecked: list.unchecked().map(FfiShoppingItem::from).collect(),
            checked: list.checked().map(FfiShoppingItem::from).collect(),
            total: list.len() as u32,
            completed: list.completed() as u32,
        }
    }

    pub fn select_recipe(&self, id: u64) -> bool {
        self.lock().select_recipe(RecipeId(id))
    }

    pub fn close_recipe(&self) {
        self.lock().close_recipe();
    }

    pub fn selected_recipe(&self) -> Option<FfiRecipe> {
        let state = self.lock();
        state
            .selected_recipe()
            .map(|r| FfiRecipe::new(r, state.is_favorite(r.id)))
    }

    pub fn add_selected_to_shopping_list(&self) -> Vec<u64> {
        self.lock()
            .add_selected_to_shopping_list()
            .into_iter()
            .map(|id| id.0)
            .collect()
    }

    pub fn start_cooking(&self) -> bool {
        self.lock().start_cooking()
    }

    pub fn next_step(&self) -> bool {
        self.lock().next_step()
    }

    pub fn previous_step(&self) -> bool {
        self.lock().previous_step()
    }

    pub fn stop_cooking(&self) {
        self.lock().stop_cooking();
    }

    pub fn cooking(&self) -> Option<FfiCookingStep> {
        self.lock().cooking().map(FfiCookingStep::from)
    }
}

fn to_owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

/// Parses catalog content and opens a session over it.
///
/// # Arguments
/// * `content` - A YAML or JSON catalog document
/// * `format` - `yaml`, `yml` or `json`
#[uniffi::export]
pub fn load_catalog_from_str(
    content: String,
    format: String,
) -> Result<Arc<CatalogSession>, CatalogSessionError> {
    CatalogSession::from_content(content, format)
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
