use alacarta::controllers::{
    MatchTier, PriceDbCache, RecipeFilter, SortOrder, filter_recipes, find_price_match,
    find_recipe, load_price_db, load_recipes, quick_search, scale_recipe, sort_recipes,
};
use alacarta::models::api::Store;

const RECIPES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/recipes.json");
const PRICE_DB: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/price_db.json");

#[tokio::test]
async fn test_scale_locro_with_prices() {
    let recipes = load_recipes(RECIPES)
        .await
        .expect("Failed to load recipes");
    let price_db = load_price_db(PRICE_DB)
        .await
        .expect("Failed to load price database");

    let locro = find_recipe(&recipes, "locro-de-papa").expect("Failed to find locro");
    let scaled = scale_recipe(locro, 8, &price_db).expect("Failed to scale recipe");

    assert_eq!(scaled.base_servings, 4);
    assert_eq!(scaled.rows.len(), 8);

    // Check papa
    let papa = &scaled.rows[0];
    assert_eq!(papa.scaled, "2 kg de papa chola, pelada y en cubos");
    assert_eq!(
        papa.price.as_ref().map(|p| p.reference_price_min),
        Some(0.9)
    );

    // Check garlic scales linearly at exactly 2x
    assert_eq!(scaled.rows[2].scaled, "4 dientes de ajo");
    assert!(scaled.rows[2].price.is_some());

    // Check queso keeps its store badge
    let queso = &scaled.rows[5];
    assert_eq!(queso.scaled, "400 g de queso fresco (Supermaxi)");
    assert_eq!(queso.store, Some(Store::Supermaxi));
    assert_eq!(queso.price.as_ref().map(|p| p.unit.as_str()), Some("lb"));

    // Check cilantro passes through without a price
    let cilantro = &scaled.rows[7];
    assert_eq!(cilantro.scaled, "Cilantro al gusto");
    assert_eq!(cilantro.price, None);

    let output = scaled.to_string();
    assert!(output.contains("Recipe: Locro de papa"));
    assert!(output.contains("Tuti $0.90/kg · Supermaxi $1.15/kg"));
}

#[tokio::test]
async fn test_scale_encebollado_dampens_seasoning() {
    let recipes = load_recipes(RECIPES)
        .await
        .expect("Failed to load recipes");
    let price_db = load_price_db(PRICE_DB)
        .await
        .expect("Failed to load price database");

    let encebollado = find_recipe(&recipes, "encebollado").expect("Failed to find encebollado");
    let scaled = scale_recipe(encebollado, 18, &price_db).expect("Failed to scale recipe");

    assert_eq!(scaled.base_servings, 6);

    let lines: Vec<&str> = scaled.rows.iter().map(|r| r.scaled.as_str()).collect();
    assert_eq!(
        lines,
        vec![
            "3 kg de albacora",
            "4,5 kg de yuca",
            "6 tomates riñón",
            "9 cebollas paiteñas, en pluma",
            "1,2 cucharadita de comino",
            "18 limones",
            "Sal y pimienta al gusto",
        ]
    );
}

#[tokio::test]
async fn test_scale_fanesca_down() {
    let recipes = load_recipes(RECIPES)
        .await
        .expect("Failed to load recipes");
    let price_db = load_price_db(PRICE_DB)
        .await
        .expect("Failed to load price database");

    let fanesca = find_recipe(&recipes, "fanesca").expect("Failed to find fanesca");
    let scaled = scale_recipe(fanesca, 5, &price_db).expect("Failed to scale recipe");

    assert_eq!(scaled.rows[0].scaled, "0,5 lb de bacalao seco");
    assert_eq!(scaled.rows[6].scaled, "0,8 cucharaditas de comino");
}

#[tokio::test]
async fn test_price_match_tiers_against_catalog() {
    let price_db = load_price_db(PRICE_DB)
        .await
        .expect("Failed to load price database");

    let exact = find_price_match("Tomate Riñón (Supermaxi)", &price_db).expect("should match");
    assert_eq!(exact.key, "tomate riñon");
    assert_eq!(exact.tier, MatchTier::Exact);

    let substring = find_price_match("6 limones", &price_db).expect("should match");
    assert_eq!(substring.key, "limon");
    assert_eq!(substring.tier, MatchTier::Substring);

    let tokens = find_price_match("2 tomates riñón", &price_db).expect("should match");
    assert_eq!(tokens.key, "tomate riñon");
    assert_eq!(tokens.tier, MatchTier::TokenOverlap);

    assert!(find_price_match("ingrediente inexistente xyz", &price_db).is_none());
}

#[tokio::test]
async fn test_search_and_sort_catalog() {
    let recipes = load_recipes(RECIPES)
        .await
        .expect("Failed to load recipes");

    let filter = RecipeFilter {
        region: Some("Sierra".to_string()),
        category: Some("Sopas".to_string()),
        ..Default::default()
    };
    let mut found = filter_recipes(&recipes, &filter);
    sort_recipes(&mut found, SortOrder::Fast);

    let slugs: Vec<&str> = found.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["locro-de-papa", "fanesca"]);

    assert_eq!(quick_search(&recipes, "sopa").len(), 3);
    assert_eq!(quick_search(&recipes, "s").len(), recipes.len());
}

#[tokio::test]
async fn test_price_cache_with_catalog_file() {
    let cache = PriceDbCache::new(PRICE_DB);

    let price_db = cache.get().await;
    assert_eq!(price_db.len(), 17);

    let missing = PriceDbCache::new("/nonexistent/price_db.json").get().await;
    assert!(missing.is_empty());
}
