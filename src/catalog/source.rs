//! Catalog sources.
//!
//! A catalog document is YAML or JSON holding either a bare list of recipes
//! or a mapping with a `recipes` list. Directories are scanned recursively and
//! every recognised document is read in sorted path order.

use super::CatalogError;
use crate::model::Recipe;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use tracing::debug;

/// Serialization format of a catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
}

impl SourceFormat {
    /// Picks the format from a file extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            "json" => Some(SourceFormat::Json),
            _ => None,
        }
    }

    /// Picks the format from the extension of `path`.
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        path.extension().and_then(Self::from_extension)
    }
}

#[derive(Deserialize)]
struct WrappedDocument {
    recipes: Vec<Recipe>,
}

/// Parses the recipes of a single document.
///
/// A mapping root must carry a `recipes` list. Anything else is read as a
/// bare list, so errors point at the offending recipe field.
pub fn parse_recipes(content: &str, format: SourceFormat) -> Result<Vec<Recipe>, CatalogError> {
    match format {
        SourceFormat::Yaml => {
            let value: serde_yaml::Value = serde_yaml::from_str(content)?;
            if value.is_mapping() {
                Ok(serde_yaml::from_value::<WrappedDocument>(value)?.recipes)
            } else {
                Ok(serde_yaml::from_value(value)?)
            }
        }
        SourceFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(content)?;
            if value.is_object() {
                Ok(serde_json::from_value::<WrappedDocument>(value)?.recipes)
            } else {
                Ok(serde_json::from_value(value)?)
            }
        }
    }
}

/// Reads the recipes of one document file, choosing the format by extension.
pub fn read_file(path: &Utf8Path) -> Result<Vec<Recipe>, CatalogError> {
    let format = SourceFormat::from_path(path)
        .ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path)?;
    let recipes = parse_recipes(&content, format)?;
    debug!(path = %path, count = recipes.len(), "read catalog document");
    Ok(recipes)
}

/// Reads every catalog document under `base_dir`, in sorted path order.
pub fn read_dir(base_dir: &Utf8Path) -> Result<Vec<Recipe>, CatalogError> {
    let mut paths = document_paths(base_dir)?;
    paths.sort();

    let mut recipes = Vec::new();
    for path in paths {
        recipes.extend(read_file(&path)?);
    }
    Ok(recipes)
}

fn document_paths(base_dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, CatalogError> {
    let pattern = base_dir.join("**/*");
    let mut paths = Vec::new();

    for entry in glob::glob(pattern.as_str())? {
        let path = entry?;
        let path = Utf8PathBuf::from_path_buf(path).map_err(|p| {
            CatalogError::InvalidPath(p.to_string_lossy().into_owned())
        })?;
        if path.is_file() && SourceFormat::from_path(&path).is_some() {
            paths.push(path);
        }
    }

    Ok(paths)
}
