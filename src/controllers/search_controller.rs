use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::Recipe;
use crate::normalize::fold_text;

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*h(?:ora)?s?\s*(\d+)?\s*m?i?n?|(\d+)\s*m?i?n")
        .expect("duration pattern is valid")
});

/// Queries shorter than this return every recipe from `quick_search`.
pub const MIN_QUICK_SEARCH_LEN: usize = 2;

/// Listing-page filters. Empty or missing fields do not filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    pub query: Option<String>,
    pub region: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(query) = non_empty(&self.query) {
            let query = fold_text(query);
            let found = contains_folded(&recipe.title, &query)
                || recipe
                    .description
                    .as_deref()
                    .is_some_and(|d| contains_folded(d, &query))
                || recipe
                    .ingredients
                    .iter()
                    .any(|i| contains_folded(i, &query));
            if !found {
                return false;
            }
        }

        facet_matches(&self.region, &recipe.region)
            && facet_matches(&self.difficulty, &recipe.difficulty)
            && facet_matches(&self.category, &recipe.category)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn facet_matches(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match non_empty(wanted) {
        Some(wanted) => actual.as_deref() == Some(wanted),
        None => true,
    }
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold_text(haystack).contains(folded_needle)
}

/// Apply a listing filter, keeping the input order
pub fn filter_recipes<'a>(recipes: &'a [Recipe], filter: &RecipeFilter) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| filter.matches(r)).collect()
}

/// Search-as-you-type over title, ingredients and category
pub fn quick_search<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let query = fold_text(query);
    if query.chars().count() < MIN_QUICK_SEARCH_LEN {
        return recipes.iter().collect();
    }

    recipes
        .iter()
        .filter(|r| {
            contains_folded(&r.title, &query)
                || r.ingredients.iter().any(|i| contains_folded(i, &query))
                || r.category.as_deref().is_some_and(|c| contains_folded(c, &query))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Region,
    Category,
    Difficulty,
}

/// Sorted, distinct, non-empty values of a facet across all recipes
pub fn facet_values(recipes: &[Recipe], facet: Facet) -> Vec<String> {
    recipes
        .iter()
        .filter_map(|r| match facet {
            Facet::Region => r.region.as_deref(),
            Facet::Category => r.category.as_deref(),
            Facet::Difficulty => r.difficulty.as_deref(),
        })
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep the catalog order.
    #[default]
    Default,
    /// By title, ignoring case and accents.
    Alpha,
    /// Shortest total time first; recipes without a readable time go last.
    Fast,
}

pub fn sort_recipes(recipes: &mut [&Recipe], order: SortOrder) {
    match order {
        SortOrder::Default => {}
        SortOrder::Alpha => recipes.sort_by_cached_key(|r| fold_text(&r.title)),
        SortOrder::Fast => recipes.sort_by_key(|r| {
            r.total_time
                .as_deref()
                .and_then(parse_minutes)
                .unwrap_or(u32::MAX)
        }),
    }
}

/// Hours and minutes of a duration like "1 hora 30 min", "2h" or "45 minutos".
fn parse_duration(text: &str) -> Option<(u32, u32)> {
    let caps = DURATION.captures(text)?;

    if let Some(hours) = caps.get(1) {
        let hours = hours.as_str().parse().ok()?;
        let minutes = caps
            .get(2)
            .map_or(Some(0), |m| m.as_str().parse().ok())?;
        return Some((hours, minutes));
    }

    let minutes = caps.get(3)?.as_str().parse().ok()?;
    Some((0, minutes))
}

/// Total minutes in a duration string
pub fn parse_minutes(text: &str) -> Option<u32> {
    let (hours, minutes) = parse_duration(text)?;
    hours.checked_mul(60)?.checked_add(minutes)
}

/// ISO 8601 duration ("PT1H30M") for structured recipe metadata
pub fn time_to_iso8601(text: &str) -> Option<String> {
    let (hours, minutes) = parse_duration(text)?;
    let iso = match (hours, minutes) {
        (0, m) => format!("PT{m}M"),
        (h, 0) => format!("PT{h}H"),
        (h, m) => format!("PT{h}H{m}M"),
    };
    Some(iso)
}
