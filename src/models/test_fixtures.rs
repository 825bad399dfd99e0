use rstest::*;

use super::{PriceDatabase, Recipe};

/// Test fixture with a small price database in a fixed key order
///
/// Shared by the matcher and scaling tests so every test sees the same
/// tie-break order.
#[fixture]
pub fn price_db() -> PriceDatabase {
    PriceDatabase::from_json_str(
        r#"{
            "tomate": {"unit": "kg", "reference_price_min": 1.2, "reference_price_max": 1.5},
            "tomate riñon": {"unit": "kg", "reference_price_min": 1.4},
            "cebolla paiteña": {"unit": "kg", "reference_price_min": 1.1, "reference_price_max": 1.3},
            "papa chola": {"unit": "kg", "reference_price_min": 0.9, "reference_price_max": 1.1},
            "queso fresco": {"unit": "lb", "reference_price_min": 2.5, "reference_price_max": 3.0},
            "queso": {"unit": "lb", "reference_price_min": 2.2},
            "harina de trigo": {"unit": "kg", "reference_price_min": 1.0},
            "platano verde": {"unit": "unidad", "reference_price_min": 0.25},
            "sal": {"unit": "kg", "reference_price_min": 0.45}
        }"#,
    )
    .expect("Failed to build test price database")
}

/// Test fixture with a handful of recipes covering every filter facet
#[fixture]
pub fn recipes() -> Vec<Recipe> {
    serde_json::from_str(
        r#"[
            {
                "slug": "locro-de-papa",
                "title": "Locro de papa",
                "description": "Sopa cremosa de papa con queso",
                "region": "Sierra",
                "category": "Sopas",
                "difficulty": "Fácil",
                "servings": 4,
                "total_time": "45 min",
                "ingredients": ["1 kg de papa chola", "200 g de queso fresco", "1 cucharadita de sal"]
            },
            {
                "slug": "encebollado",
                "title": "Encebollado",
                "description": "Caldo de albacora con yuca",
                "region": "Costa",
                "category": "Sopas",
                "difficulty": "Media",
                "servings": "6 porciones",
                "total_time": "1 hora 30 min",
                "ingredients": ["1 kg de albacora", "2 cebollas paiteñas", "1/2 cucharadita de comino"]
            },
            {
                "slug": "bolon-de-verde",
                "title": "Bolón de verde",
                "region": "Costa",
                "category": "Desayunos",
                "difficulty": "Fácil",
                "servings": "2",
                "total_time": "30 minutos",
                "ingredients": ["3 plátanos verdes", "100 g de queso", "Sal al gusto"]
            },
            {
                "slug": "ayampaco",
                "title": "Ayampaco",
                "region": "Amazonía",
                "category": "Platos fuertes",
                "difficulty": "Difícil",
                "ingredients": ["500 g de pollo", "hojas de bijao"]
            }
        ]"#,
    )
    .expect("Failed to build test recipes")
}
