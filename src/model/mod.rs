mod recipe;
mod shopping_item;

pub use recipe::{Recipe, RecipeId};
pub use shopping_item::{ShoppingItem, ShoppingItemId};
