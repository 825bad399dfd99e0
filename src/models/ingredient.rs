use super::quantity::Quantity;
use super::vocab::is_condiment_keyword;
use crate::normalize::{fold_text, words};

/// An ingredient line split into leading whitespace, quantity and the rest.
///
/// "2 tazas de harina" becomes `Integer(2)` with remainder " tazas de harina".
/// Lines without a leading number keep all their text in `remainder`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientLine<'a> {
    pub leading: &'a str,
    pub quantity: Quantity,
    pub remainder: &'a str,
}

impl<'a> IngredientLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        let body = line.trim_start();
        let leading = &line[..line.len() - body.len()];
        let (quantity, remainder) = Quantity::parse(body);

        Self {
            leading,
            quantity,
            remainder,
        }
    }

    /// Whether the text after the number names a seasoning.
    pub fn is_condiment(&self) -> bool {
        let folded = fold_text(self.remainder);
        words(&folded).any(is_condiment_keyword)
    }
}
