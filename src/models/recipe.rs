use serde::{Deserialize, Serialize};

/// A recipe as stored in `recipes.json`. Fields the library does not use are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub servings: Option<Servings>,
    #[serde(default)]
    pub total_time: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Serving count, written either as a number or as text like "4 porciones".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Servings {
    Count(u32),
    Text(String),
}

impl Servings {
    /// Leading number of the serving count, if it has one.
    pub fn count(&self) -> Option<u32> {
        match self {
            Servings::Count(n) => Some(*n),
            Servings::Text(text) => {
                let digits: String = text
                    .trim_start()
                    .chars()
                    .take_while(char::is_ascii_digit)
                    .collect();
                digits.parse().ok()
            }
        }
    }
}

impl Recipe {
    /// Base serving count, when the recipe states one greater than zero.
    pub fn base_servings(&self) -> Option<u32> {
        self.servings
            .as_ref()
            .and_then(Servings::count)
            .filter(|&n| n > 0)
    }
}
