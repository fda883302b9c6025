//! The immutable recipe collection.
//!
//! A [`Catalog`] is built once from a static source and shared by every state
//! derived from it. Cloning a catalog is cheap; the recipes themselves are
//! never copied or mutated.

use crate::model::{Recipe, RecipeId};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

pub mod source;

pub use source::SourceFormat;

/// Errors that can occur when loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported catalog file type: {0}")]
    UnsupportedFormat(Utf8PathBuf),

    #[error("Catalog source does not exist: {0}")]
    NotFound(Utf8PathBuf),

    #[error("Path contains invalid UTF-8: {0}")]
    InvalidPath(String),

    #[error("Duplicate recipe id: {0}")]
    DuplicateId(RecipeId),

    #[error("Failed to read directory: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("Failed to create glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),
}

/// Read-only, ordered collection of recipes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Arc<Vec<Recipe>>,
    index: Arc<HashMap<RecipeId, usize>>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two recipes share an id.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(recipes.len());
        for (position, recipe) in recipes.iter().enumerate() {
            if index.insert(recipe.id, position).is_some() {
                warn!(id = %recipe.id, "rejecting catalog with duplicate recipe id");
                return Err(CatalogError::DuplicateId(recipe.id));
            }
        }

        Ok(Catalog {
            recipes: Arc::new(recipes),
            index: Arc::new(index),
        })
    }

    /// Parses a catalog document held in memory.
    pub fn parse(content: &str, format: SourceFormat) -> Result<Self, CatalogError> {
        Catalog::new(source::parse_recipes(content, format)?)
    }

    /// All recipes in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.index.get(&id).map(|&position| &self.recipes[position])
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Distinct cuisines in first-seen order.
    pub fn cuisines(&self) -> Vec<&str> {
        distinct(self.recipes.iter().map(|r| r.cuisine.as_str()))
    }

    /// Distinct diet tags in first-seen order.
    pub fn diets(&self) -> Vec<&str> {
        distinct(
            self.recipes
                .iter()
                .flat_map(|r| r.diet.iter().map(String::as_str)),
        )
    }

    /// Distinct difficulty levels in first-seen order.
    pub fn difficulties(&self) -> Vec<&str> {
        distinct(self.recipes.iter().map(|r| r.difficulty.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(*v))
        .collect()
}

/// Loads a catalog from a document file or a directory of documents.
///
/// Files are read according to their extension (`.yaml`, `.yml` or `.json`).
/// Directories are scanned recursively and their documents concatenated in
/// sorted path order.
///
/// # Examples
///
/// ```no_run
/// use recipe_shelf::load_catalog;
/// use camino::Utf8Path;
///
/// let catalog = load_catalog(Utf8Path::new("./data/recipes.yaml"))?;
/// println!("{} recipes", catalog.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }

    let recipes = if path.is_dir() {
        source::read_dir(path)?
    } else {
        source::read_file(path)?
    };

    let catalog = Catalog::new(recipes)?;
    info!(path = %path, recipes = catalog.len(), "loaded recipe catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = indoc! {r#"
        - id: 1
          title: Pasta Bake
          cuisine: Italian
          diet: [Vegetarian]
          difficulty: Medium
          cookTime: 45
        - id: 2
          title: Salad
          cuisine: Greek
          diet: [Vegetarian, Vegan]
          difficulty: Easy
          cookTime: 10
        - id: 3
          title: Lasagne
          cuisine: Italian
          difficulty: Hard
          cookTime: 90
        "#};

    #[test]
    fn test_catalog_from_str() {
        let catalog = Catalog::parse(SAMPLE, SourceFormat::Yaml).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(RecipeId(2)).unwrap().title, "Salad");
        assert!(catalog.get(RecipeId(9)).is_none());
        assert!(catalog.contains(RecipeId(3)));
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::parse(SAMPLE, SourceFormat::Yaml).unwrap();
        let ids: Vec<u64> = catalog.recipes().iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::parse(
            "- id: 1\n  title: A\n- id: 1\n  title: B\n",
            SourceFormat::Yaml,
        );
        assert!(matches!(result, Err(CatalogError::DuplicateId(RecipeId(1)))));
    }

    #[test]
    fn test_facets() {
        let catalog = Catalog::parse(SAMPLE, SourceFormat::Yaml).unwrap();
        assert_eq!(catalog.cuisines(), vec!["Italian", "Greek"]);
        assert_eq!(catalog.diets(), vec!["Vegetarian", "Vegan"]);
        assert_eq!(catalog.difficulties(), vec!["Medium", "Easy", "Hard"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.cuisines().is_empty());
    }

    #[test]
    fn test_load_catalog_file() {
        let temp_dir = TempDir::new().unwrap();
        let base = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
        let path = base.join("recipes.yaml");
        fs::write(&path, SAMPLE).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_load_catalog_dir() {
        let temp_dir = TempDir::new().unwrap();
        let base = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
        fs::write(base.join("main.yaml"), SAMPLE).unwrap();
        fs::write(base.join("extra.json"), r#"[{"id": 4, "title": "Tacos"}]"#).unwrap();

        let catalog = load_catalog(&base).unwrap();
        let ids: Vec<u64> = catalog.recipes().iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_load_catalog_missing_path() {
        let result = load_catalog(Utf8Path::new("/nonexistent/recipes.yaml"));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Catalog source does not exist"));
    }
}
