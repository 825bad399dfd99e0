//! Text folding shared by the scaler and the price matcher.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::vocab::{is_connector_word, is_unit_word};

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("parenthetical pattern is valid"));

/// Lowercase, fold accented vowels and `ñ` to plain Latin letters, and trim.
pub fn fold_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(fold_char)
        .collect::<String>()
        .trim()
        .to_string()
}

fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        other => other,
    }
}

/// Collapse runs of whitespace into a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Alphanumeric words of `text`, splitting on everything else.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

/// Reduce an ingredient description to the key used for price lookups.
///
/// Lowercases, drops `(...)` asides, strips a leading quantity, unit word and
/// connector ("2 tazas de"), keeps only the text before the first `,` or `;`,
/// folds accents and collapses whitespace.
pub fn normalize_ingredient(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_asides = PARENTHETICAL.replace_all(&lowered, " ");
    let folded = fold_text(&without_asides);
    let name = strip_leading_measure(&folded);
    let head = name.split([',', ';']).next().unwrap_or_default();
    collapse_whitespace(head)
}

fn strip_leading_measure(text: &str) -> &str {
    let mut rest = text.trim_start();

    while rest.starts_with(|c: char| c.is_ascii_digit()) {
        let len = rest
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '/' | '.' | ',')))
            .unwrap_or(rest.len());
        rest = rest[len..].trim_start();
    }

    let (word, after) = split_first_word(rest);
    if is_unit_word(word) {
        rest = after;
    }

    let (word, after) = split_first_word(rest);
    if is_connector_word(word) {
        rest = after;
    }

    rest
}

fn split_first_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, after)) => (word, after.trim_start()),
        None => (text, ""),
    }
}
