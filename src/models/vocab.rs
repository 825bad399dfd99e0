//! Fixed vocabularies used by the scaler and the price matcher.
//!
//! All entries are lowercase and unaccented, since they are compared against
//! text that has already been through [`crate::normalize::fold_text`].

/// Words marking a seasoning line. Seasonings scale sub-linearly past 2x.
pub const CONDIMENT_KEYWORDS: &[&str] = &[
    "sal",
    "salt",
    "pimienta",
    "pepper",
    "comino",
    "cumin",
    "especia",
    "especias",
    "spice",
    "spices",
    "condimento",
    "condimentos",
    "sazonador",
    "ajo",
    "ajos",
    "garlic",
    "achiote",
    "annatto",
];

/// Measuring words stripped from the front of an ingredient before price lookup.
pub const UNIT_WORDS: &[&str] = &[
    // Spanish
    "taza",
    "tazas",
    "cucharada",
    "cucharadas",
    "cucharadita",
    "cucharaditas",
    "cucharita",
    "cucharitas",
    "kg",
    "kilo",
    "kilos",
    "g",
    "gr",
    "gramos",
    "lb",
    "libra",
    "libras",
    "litro",
    "litros",
    "ml",
    "cc",
    "unidad",
    "unidades",
    "diente",
    "dientes",
    "atado",
    "atados",
    "manojo",
    "manojos",
    "trozo",
    "trozos",
    "pedazo",
    "pedazos",
    "lonja",
    "lonjas",
    "rodaja",
    "rodajas",
    "filete",
    "filetes",
    "pizca",
    "pizcas",
    "ramita",
    "ramitas",
    // English
    "cup",
    "cups",
    "tablespoon",
    "tablespoons",
    "teaspoon",
    "teaspoons",
    "liter",
    "liters",
    "unit",
    "units",
    "clove",
    "cloves",
    "bunch",
    "bunches",
    "piece",
    "pieces",
    "slice",
    "slices",
    "fillet",
    "fillets",
    "pinch",
    "pinches",
    "sprig",
    "sprigs",
];

/// Linking words between a unit and the ingredient name ("taza de harina").
pub const CONNECTOR_WORDS: &[&str] = &["de", "del", "of"];

pub fn is_condiment_keyword(word: &str) -> bool {
    CONDIMENT_KEYWORDS.contains(&word)
}

pub fn is_unit_word(word: &str) -> bool {
    UNIT_WORDS.contains(&word)
}

pub fn is_connector_word(word: &str) -> bool {
    CONNECTOR_WORDS.contains(&word)
}
