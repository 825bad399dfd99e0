use tracing::debug;

use super::price_controller::{detect_store, find_price_entry};
use crate::error::Result;
use crate::models::api::{IngredientRow, ScaledRecipe};
use crate::models::{IngredientLine, PriceDatabase, Recipe, ScaleRatio, format_quantity};

/// Ratio above which seasoning lines stop scaling linearly.
pub const DAMPENING_THRESHOLD: f64 = 2.0;
/// Share of the linear growth a seasoning keeps past the threshold.
pub const DAMPENING_FACTOR: f64 = 0.7;

/// Scale the leading quantity of an ingredient line
/// Fails only when `ratio` is not a finite number above zero
pub fn scale_ingredient_line(line: &str, ratio: f64) -> Result<String> {
    let ratio = ScaleRatio::new(ratio)?;
    Ok(scale_line(line, ratio))
}

/// Scale an ingredient line by an already validated ratio
///
/// Lines without a leading number come back unchanged, as does every line
/// when the ratio is exactly 1. Otherwise the number is replaced by its
/// scaled value and the rest of the line is kept byte for byte.
pub fn scale_line(line: &str, ratio: ScaleRatio) -> String {
    if ratio.is_identity() {
        return line.to_string();
    }

    let parsed = IngredientLine::parse(line);
    let Some(value) = parsed.quantity.value() else {
        return line.to_string();
    };

    let scaled = scaled_amount(value, ratio, parsed.is_condiment());
    format!(
        "{}{}{}",
        parsed.leading,
        format_quantity(scaled),
        parsed.remainder
    )
}

/// Apply the scaling policy to a single amount.
///
/// Seasonings grow by `1 + (ratio - 1) * DAMPENING_FACTOR` once the ratio
/// exceeds `DAMPENING_THRESHOLD`; everything else is linear.
pub fn scaled_amount(value: f64, ratio: ScaleRatio, condiment: bool) -> f64 {
    let ratio = ratio.get();
    if condiment && ratio > DAMPENING_THRESHOLD {
        value * (1.0 + (ratio - 1.0) * DAMPENING_FACTOR)
    } else {
        value * ratio
    }
}

/// Scale a whole recipe to `servings`, attaching price data to each line
/// Recipes that do not state their servings are treated as serving one
pub fn scale_recipe(
    recipe: &Recipe,
    servings: u32,
    price_db: &PriceDatabase,
) -> Result<ScaledRecipe> {
    let base_servings = recipe.base_servings().unwrap_or(1);
    let ratio = ScaleRatio::from_servings(servings, base_servings)?;

    debug!(
        slug = %recipe.slug,
        base_servings,
        servings,
        ratio = ratio.get(),
        "scaling recipe"
    );

    let rows = recipe
        .ingredients
        .iter()
        .map(|line| IngredientRow {
            original: line.clone(),
            scaled: scale_line(line, ratio),
            store: detect_store(line),
            price: find_price_entry(line, price_db).cloned(),
        })
        .collect();

    Ok(ScaledRecipe {
        slug: recipe.slug.clone(),
        title: recipe.title.clone(),
        base_servings,
        servings,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlaCartaError;
    use crate::models::api::Store;
    use crate::models::test_fixtures::{price_db, recipes};
    use rstest::*;

    #[rstest]
    #[case("2 tazas de harina", 3.0, "6 tazas de harina")]
    #[case("1/2 taza de leche", 2.0, "1 taza de leche")]
    #[case("1 1/2 cucharadas de aceite", 2.0, "3 cucharadas de aceite")]
    #[case("1,5 kg de papa", 3.0, "4,5 kg de papa")]
    #[case("1.5 kg de papa", 2.0, "3 kg de papa")]
    #[case("3 huevos", 0.5, "1,5 huevos")]
    #[case("500g de carne", 1.5, "750g de carne")]
    #[case("  2  tazas de agua", 2.0, "  4  tazas de agua")]
    #[case("9000000000000000000 g de arroz", 2.0, "18000000000000000000 g de arroz")]
    #[case("99999999999999999999 g de arroz", 2.0, "200000000000000000000 g de arroz")]
    fn test_linear_scaling(#[case] line: &str, #[case] ratio: f64, #[case] expected: &str) {
        assert_eq!(
            scale_ingredient_line(line, ratio).expect("valid ratio"),
            expected
        );
    }

    #[rstest]
    #[case("1 cucharadita de sal", 2.0, "2 cucharadita de sal")]
    #[case("1 cucharadita de sal", 4.0, "3,1 cucharadita de sal")]
    #[case("2 dientes de ajo", 5.0, "7,6 dientes de ajo")]
    #[case("1/2 cucharadita de comino", 3.0, "1,2 cucharadita de comino")]
    #[case("1 cucharadita de sal", 1.5, "1,5 cucharadita de sal")]
    #[case("1 cucharadita de sal", 0.5, "0,5 cucharadita de sal")]
    fn test_condiment_dampening(#[case] line: &str, #[case] ratio: f64, #[case] expected: &str) {
        assert_eq!(
            scale_ingredient_line(line, ratio).expect("valid ratio"),
            expected
        );
    }

    #[rstest]
    #[case("Sal al gusto")]
    #[case("Hojas de bijao")]
    #[case("")]
    #[case("1/0 taza de agua")]
    fn test_unparsable_lines_pass_through(#[case] line: &str) {
        for ratio in [0.5, 2.0, 7.0] {
            assert_eq!(scale_ingredient_line(line, ratio).expect("valid ratio"), line);
        }
    }

    #[rstest]
    #[case("1/2 taza de leche")]
    #[case("1.5 kg de papa")]
    #[case("2 tazas de harina")]
    #[case("Sal al gusto")]
    fn test_identity_ratio_is_noop(#[case] line: &str) {
        assert_eq!(scale_ingredient_line(line, 1.0).expect("valid ratio"), line);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-2.0)]
    #[case(f64::NAN)]
    fn test_invalid_ratio_fails(#[case] ratio: f64) {
        let result = scale_ingredient_line("2 tazas de harina", ratio);
        assert!(matches!(result, Err(AlaCartaError::InvalidRatio(_))));
    }

    #[test]
    fn test_scaled_amount_threshold_is_exclusive() {
        let at_threshold = ScaleRatio::new(2.0).expect("valid ratio");
        assert_eq!(scaled_amount(1.0, at_threshold, true), 2.0);

        let above = ScaleRatio::new(3.0).expect("valid ratio");
        assert!((scaled_amount(1.0, above, true) - 2.4).abs() < 1e-9);
        assert_eq!(scaled_amount(1.0, above, false), 3.0);
    }

    #[rstest]
    fn test_scale_recipe(recipes: Vec<Recipe>, price_db: PriceDatabase) {
        let locro = &recipes[0];
        let scaled = scale_recipe(locro, 8, &price_db).expect("Failed to scale recipe");

        assert_eq!(scaled.base_servings, 4);
        assert_eq!(scaled.servings, 8);
        assert_eq!(scaled.rows.len(), 3);

        assert_eq!(scaled.rows[0].scaled, "2 kg de papa chola");
        assert_eq!(
            scaled.rows[0].price.as_ref().map(|p| p.reference_price_min),
            Some(0.9)
        );

        assert_eq!(scaled.rows[1].scaled, "400 g de queso fresco");
        assert_eq!(scaled.rows[2].scaled, "2 cucharadita de sal");
        assert_eq!(scaled.rows[2].original, "1 cucharadita de sal");
    }

    #[rstest]
    fn test_scale_recipe_without_servings_uses_one(recipes: Vec<Recipe>, price_db: PriceDatabase) {
        let ayampaco = &recipes[3];
        let scaled = scale_recipe(ayampaco, 2, &price_db).expect("Failed to scale recipe");

        assert_eq!(scaled.base_servings, 1);
        assert_eq!(scaled.rows[0].scaled, "1000 g de pollo");
        assert_eq!(scaled.rows[1].scaled, "hojas de bijao");
        assert_eq!(scaled.rows[1].price, None);
    }

    #[rstest]
    fn test_scale_recipe_to_zero_fails(recipes: Vec<Recipe>, price_db: PriceDatabase) {
        let result = scale_recipe(&recipes[0], 0, &price_db);
        assert!(matches!(result, Err(AlaCartaError::InvalidRatio(_))));
    }

    #[test]
    fn test_scale_recipe_detects_store() {
        let recipe = Recipe {
            slug: "pan".to_string(),
            title: "Pan de yuca".to_string(),
            description: None,
            region: None,
            category: None,
            difficulty: None,
            servings: None,
            total_time: None,
            ingredients: vec!["200 g de queso (Supermaxi)".to_string()],
        };

        let scaled =
            scale_recipe(&recipe, 1, &PriceDatabase::default()).expect("Failed to scale recipe");
        assert_eq!(scaled.rows[0].store, Some(Store::Supermaxi));
        assert_eq!(scaled.rows[0].scaled, "200 g de queso (Supermaxi)");
    }
}
