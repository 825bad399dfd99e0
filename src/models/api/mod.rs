mod price_quote;
mod scaled_recipe;

pub use price_quote::{PriceQuote, Store};
pub use scaled_recipe::{IngredientRow, ScaledRecipe};
