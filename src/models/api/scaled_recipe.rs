use std::fmt;

use super::price_quote::Store;
use crate::models::PriceEntry;

/// A recipe resized to a serving count, ready for display.
#[derive(Debug, Clone)]
pub struct ScaledRecipe {
    pub slug: String,
    pub title: String,
    pub base_servings: u32,
    pub servings: u32,
    pub rows: Vec<IngredientRow>,
}

/// One ingredient line after scaling, with whatever price data matched it.
#[derive(Debug, Clone)]
pub struct IngredientRow {
    pub original: String,
    pub scaled: String,
    pub store: Option<Store>,
    pub price: Option<PriceEntry>,
}

impl IngredientRow {
    /// Quotes joined for a single display line, empty when there is no price.
    pub fn price_line(&self) -> String {
        self.price
            .as_ref()
            .map(|entry| {
                entry
                    .quotes()
                    .iter()
                    .map(|q| q.to_string())
                    .collect::<Vec<_>>()
                    .join(" · ")
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for ScaledRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe: {}", self.title)?;
        writeln!(f, "Servings: {} (base {})", self.servings, self.base_servings)?;
        writeln!(f, "\nIngredients:")?;

        for row in &self.rows {
            write!(f, "  - {}", row.scaled)?;
            if let Some(store) = row.store {
                write!(f, " [{}]", store)?;
            }
            writeln!(f)?;

            let prices = row.price_line();
            if !prices.is_empty() {
                writeln!(f, "      {}", prices)?;
            }
        }

        Ok(())
    }
}
