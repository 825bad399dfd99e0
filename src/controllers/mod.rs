mod price_controller;
mod recipe_controller;
mod scaling_controller;
mod search_controller;

pub use price_controller::{
    MIN_TOKEN_LEN, MatchTier, PriceMatch, detect_store, find_price_entry, find_price_match,
};
pub use recipe_controller::{PriceDbCache, find_recipe, load_price_db, load_recipes};
pub use scaling_controller::{
    DAMPENING_FACTOR, DAMPENING_THRESHOLD, scale_ingredient_line, scale_line, scale_recipe,
    scaled_amount,
};
pub use search_controller::{
    Facet, RecipeFilter, SortOrder, facet_values, filter_recipes, parse_minutes, quick_search,
    sort_recipes, time_to_iso8601,
};
