use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a recipe within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecipeId {
    fn from(id: u64) -> Self {
        RecipeId(id)
    }
}

/// A single dish in the catalog.
///
/// Recipes are loaded once from a static source and never mutated afterwards.
/// Field names follow the catalog documents, so `cookTime` and `title` (or its
/// older spelling `name`) are accepted as written there.
///
/// # Examples
///
/// ```
/// # use recipe_shelf::Recipe;
/// let recipe: Recipe = serde_yaml::from_str(
///     "id: 1\ntitle: Pasta Bake\ncuisine: Italian\ncookTime: 45\ningredients: [Pasta, Cheese]",
/// )?;
/// assert_eq!(recipe.title, "Pasta Bake");
/// assert!(recipe.diet.is_empty());
/// # Ok::<(), serde_yaml::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Ingredient names in recipe order; duplicates are kept
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub diet: Vec<String>,
    #[serde(default)]
    pub difficulty: String,
    /// Cooking time in minutes
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Recipe {
    /// Returns true if `diet` is one of this recipe's diet tags.
    pub fn has_diet(&self, diet: &str) -> bool {
        self.diet.iter().any(|d| d == diet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_recipe_from_yaml_with_defaults() {
        let recipe: Recipe = serde_yaml::from_str(indoc! {r#"
            id: 7
            title: Greek Salad
            cuisine: Greek
            cookTime: 10
            "#})
        .unwrap();

        assert_eq!(recipe.id, RecipeId(7));
        assert_eq!(recipe.cook_time, 10);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
        assert!(recipe.image.is_none());
        assert_eq!(recipe.servings, 0);
    }

    #[test]
    fn test_recipe_name_alias() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id": 3, "name": "Pad Thai", "cuisine": "Thai"}"#).unwrap();
        assert_eq!(recipe.title, "Pad Thai");
    }

    #[test]
    fn test_recipe_keeps_duplicate_ingredients() {
        let recipe: Recipe = serde_yaml::from_str(indoc! {r#"
            id: 1
            title: Omelette
            ingredients: [Egg, Butter, Egg]
            "#})
        .unwrap();
        assert_eq!(recipe.ingredients, vec!["Egg", "Butter", "Egg"]);
    }

    #[test]
    fn test_has_diet() {
        let recipe: Recipe = serde_yaml::from_str(indoc! {r#"
            id: 1
            title: Buddha Bowl
            diet: [Vegan, Gluten-Free]
            "#})
        .unwrap();
        assert!(recipe.has_diet("Vegan"));
        assert!(!recipe.has_diet("vegan"));
        assert!(!recipe.has_diet("Keto"));
    }

    #[test]
    fn test_recipe_id_display() {
        assert_eq!(RecipeId(42).to_string(), "42");
    }
}
