use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::error::{AlaCartaError, Result};
use crate::models::{PriceDatabase, Recipe};

/// Load every recipe from a JSON array file
pub async fn load_recipes(path: impl AsRef<Path>) -> Result<Vec<Recipe>> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path).await?;
    let recipes: Vec<Recipe> = serde_json::from_str(&contents)?;

    info!(path = %path.display(), count = recipes.len(), "loaded recipes");
    Ok(recipes)
}

/// Load the price database from a JSON object file
pub async fn load_price_db(path: impl AsRef<Path>) -> Result<PriceDatabase> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path).await?;
    let price_db = PriceDatabase::from_json_str(&contents)?;

    info!(path = %path.display(), entries = price_db.len(), "loaded price database");
    Ok(price_db)
}

/// Look up a recipe by its slug
pub fn find_recipe<'a>(recipes: &'a [Recipe], slug: &str) -> Result<&'a Recipe> {
    recipes
        .iter()
        .find(|r| r.slug == slug)
        .ok_or_else(|| AlaCartaError::RecipeNotFound(slug.to_string()))
}

/// Price database loaded at most once per process.
///
/// Prices are optional: a failed load is logged and answered with an empty
/// database, and the next call tries the file again.
pub struct PriceDbCache {
    path: PathBuf,
    cell: OnceCell<Arc<PriceDatabase>>,
}

impl PriceDbCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    pub async fn get(&self) -> Arc<PriceDatabase> {
        let loaded = self
            .cell
            .get_or_try_init(|| async { load_price_db(&self.path).await.map(Arc::new) })
            .await;

        match loaded {
            Ok(price_db) => Arc::clone(price_db),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "price database unavailable, continuing without prices"
                );
                Arc::new(PriceDatabase::default())
            }
        }
    }
}
