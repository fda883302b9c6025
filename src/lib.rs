pub mod catalog;
pub mod cooking;
pub mod favorites;
pub mod ffi;
pub mod filter;
pub mod model;
pub mod shopping;
pub mod state;

pub use catalog::{load_catalog, Catalog, CatalogError, SourceFormat};
pub use cooking::CookingSession;
pub use favorites::FavoriteSet;
pub use filter::{FilterCriteria, FilterError, SearchQuery, TimeBucket};
pub use model::*;
pub use shopping::{ShoppingList, ShoppingListError};
pub use state::{CatalogState, Command, Snapshot};

uniffi::setup_scaffolding!();
