mod ingredient;
mod price_entry;
mod quantity;
mod recipe;

pub mod api;
pub mod vocab;

#[cfg(test)]
pub mod test_fixtures;

pub use ingredient::IngredientLine;
pub use price_entry::{PriceDatabase, PriceEntry};
pub use quantity::{Quantity, ScaleRatio, format_quantity};
pub use recipe::{Recipe, Servings};
