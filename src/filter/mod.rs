//! Search and filter predicates over the catalog.
//!
//! The filtered view is recomputed from scratch on every call. It keeps
//! catalog order and never ranks.

use crate::model::Recipe;

mod model;

pub use model::{FilterCriteria, FilterError, SearchQuery, TimeBucket};

/// Returns the recipes that match `query` and every axis of `criteria`,
/// in their original order.
///
/// The query matches if the title, any ingredient or the cuisine contains it,
/// ignoring case. Filter axes are combined with AND.
pub fn filtered_view<'a>(
    recipes: &'a [Recipe],
    query: &SearchQuery,
    criteria: &FilterCriteria,
) -> Vec<&'a Recipe> {
    let needle = query.as_str().to_lowercase();

    recipes
        .iter()
        .filter(|recipe| needle.is_empty() || matches_search(recipe, &needle))
        .filter(|recipe| matches_criteria(recipe, criteria))
        .collect()
}

/// `needle` must already be lowercase.
fn matches_search(recipe: &Recipe, needle: &str) -> bool {
    contains_ignore_case(&recipe.title, needle)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| contains_ignore_case(ingredient, needle))
        || contains_ignore_case(&recipe.cuisine, needle)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Checks a single recipe against every constrained axis. Empty values
/// constrain nothing.
pub fn matches_criteria(recipe: &Recipe, criteria: &FilterCriteria) -> bool {
    if let Some(cuisine) = axis(&criteria.cuisine) {
        if recipe.cuisine != cuisine {
            return false;
        }
    }
    if let Some(diet) = axis(&criteria.diet) {
        if !recipe.has_diet(diet) {
            return false;
        }
    }
    if let Some(difficulty) = axis(&criteria.difficulty) {
        if recipe.difficulty != difficulty {
            return false;
        }
    }
    if let Some(time) = criteria.time {
        if !time.contains(recipe.cook_time) {
            return false;
        }
    }
    true
}

fn axis(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
