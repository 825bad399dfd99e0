use tracing::debug;

use crate::models::api::Store;
use crate::models::{PriceDatabase, PriceEntry};
use crate::normalize::{fold_text, normalize_ingredient, words};

/// Shortest token, in characters, the overlap fallback will match on.
pub const MIN_TOKEN_LEN: usize = 5;

/// Which strategy produced a price match, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    Substring,
    TokenOverlap,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceMatch<'a> {
    pub key: &'a str,
    pub entry: &'a PriceEntry,
    pub tier: MatchTier,
}

/// Find the reference price for a free-text ingredient
/// Returns None when nothing in the database resembles it
pub fn find_price_entry<'a>(
    ingredient: &str,
    price_db: &'a PriceDatabase,
) -> Option<&'a PriceEntry> {
    find_price_match(ingredient, price_db).map(|m| m.entry)
}

/// Resolve an ingredient against the price database, reporting how it matched
///
/// Tries, in order: a key equal to the normalized ingredient; keys contained
/// in it or containing it (longest overlap wins); keys sharing words of at
/// least `MIN_TOKEN_LEN` characters (most shared words wins). Ties go to the
/// key that comes first in the database.
pub fn find_price_match<'a>(
    ingredient: &str,
    price_db: &'a PriceDatabase,
) -> Option<PriceMatch<'a>> {
    let name = normalize_ingredient(ingredient);
    if name.is_empty() {
        return None;
    }

    let found = exact_match(&name, price_db)
        .or_else(|| substring_match(&name, price_db))
        .or_else(|| token_overlap_match(&name, price_db));

    match &found {
        Some(m) => debug!(ingredient, key = m.key, tier = ?m.tier, "matched price entry"),
        None => debug!(ingredient, normalized = %name, "no price entry"),
    }

    found
}

fn exact_match<'a>(name: &str, price_db: &'a PriceDatabase) -> Option<PriceMatch<'a>> {
    let (key, entry) = price_db.get_key_value(name).or_else(|| {
        price_db
            .iter()
            .find(|(_, normalized, _)| *normalized == name)
            .map(|(key, _, entry)| (key, entry))
    })?;

    Some(PriceMatch {
        key,
        entry,
        tier: MatchTier::Exact,
    })
}

fn substring_match<'a>(name: &str, price_db: &'a PriceDatabase) -> Option<PriceMatch<'a>> {
    let candidates = price_db
        .iter()
        .filter(|(_, normalized, _)| !normalized.is_empty())
        .filter_map(|(key, normalized, entry)| {
            let overlap = if name.contains(normalized) {
                normalized.chars().count()
            } else if normalized.contains(name) {
                name.chars().count()
            } else {
                return None;
            };
            Some((overlap, key, entry))
        });

    best_candidate(candidates, MatchTier::Substring)
}

fn token_overlap_match<'a>(name: &str, price_db: &'a PriceDatabase) -> Option<PriceMatch<'a>> {
    let mut tokens: Vec<&str> = Vec::new();
    for token in significant_tokens(name) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    if tokens.is_empty() {
        return None;
    }

    let candidates = price_db.iter().filter_map(|(key, normalized, entry)| {
        let key_tokens: Vec<&str> = significant_tokens(normalized).collect();
        let shared = tokens.iter().filter(|t| key_tokens.contains(t)).count();
        (shared > 0).then_some((shared, key, entry))
    });

    best_candidate(candidates, MatchTier::TokenOverlap)
}

fn significant_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
}

/// Highest-scoring candidate, keeping the earliest on ties.
fn best_candidate<'a>(
    candidates: impl Iterator<Item = (usize, &'a str, &'a PriceEntry)>,
    tier: MatchTier,
) -> Option<PriceMatch<'a>> {
    let mut best: Option<(usize, &'a str, &'a PriceEntry)> = None;
    for candidate in candidates {
        if best.is_none_or(|(score, _, _)| candidate.0 > score) {
            best = Some(candidate);
        }
    }

    best.map(|(_, key, entry)| PriceMatch { key, entry, tier })
}

/// Store named in an ingredient line, e.g. "queso fresco (Supermaxi)"
/// Supermaxi (or its Megamaxi format) wins over Tuti, which wins over TIA
pub fn detect_store(ingredient: &str) -> Option<Store> {
    let folded = fold_text(ingredient);
    let found: Vec<&str> = words(&folded).collect();

    if found.iter().any(|w| matches!(*w, "supermaxi" | "megamaxi")) {
        Some(Store::Supermaxi)
    } else if found.contains(&"tuti") {
        Some(Store::Tuti)
    } else if found.contains(&"tia") {
        Some(Store::Tia)
    } else {
        None
    }
}
