use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use super::api::{PriceQuote, Store};
use crate::error::{AlaCartaError, Result};
use crate::normalize::normalize_ingredient;

/// Reference price range for one canonical ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    #[serde(default = "default_unit")]
    pub unit: String,
    pub reference_price_min: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_price_max: Option<f64>,
}

fn default_unit() -> String {
    "kg".to_string()
}

impl PriceEntry {
    /// Store quotes shown next to an ingredient: Tuti at the minimum price,
    /// Supermaxi at the maximum (or the minimum when there is no maximum).
    /// A zero minimum means "no price data" and yields nothing.
    pub fn quotes(&self) -> Vec<PriceQuote> {
        if self.reference_price_min <= 0.0 {
            return Vec::new();
        }

        let unit = if self.unit.is_empty() {
            default_unit()
        } else {
            self.unit.clone()
        };

        vec![
            PriceQuote {
                store: Store::Tuti,
                amount: self.reference_price_min,
                unit: unit.clone(),
            },
            PriceQuote {
                store: Store::Supermaxi,
                amount: self.reference_price_max.unwrap_or(self.reference_price_min),
                unit,
            },
        ]
    }

    fn validate(&self, key: &str) -> Result<()> {
        let prices = std::iter::once(self.reference_price_min).chain(self.reference_price_max);
        for price in prices {
            if !price.is_finite() || price < 0.0 {
                return Err(AlaCartaError::InvalidPriceDb(format!(
                    "entry '{key}' has invalid price {price}"
                )));
            }
        }
        Ok(())
    }
}

/// Read-only price dictionary keyed by canonical ingredient name.
///
/// Keys keep the order they had in the source file, and each key's normalized
/// form is computed once up front so lookups never renormalize the database.
#[derive(Debug, Clone, Default)]
pub struct PriceDatabase {
    entries: IndexMap<String, PriceEntry>,
    normalized_keys: Vec<String>,
}

impl PriceDatabase {
    pub fn new(entries: IndexMap<String, PriceEntry>) -> Result<Self> {
        for (key, entry) in &entries {
            entry.validate(key)?;
        }

        let normalized_keys = entries.keys().map(|k| normalize_ingredient(k)).collect();

        Ok(Self {
            entries,
            normalized_keys,
        })
    }

    /// Parse a JSON object of `name -> {unit, reference_price_min, reference_price_max?}`.
    ///
    /// Malformed JSON is a `Json` error; well-formed JSON of the wrong shape
    /// is `InvalidPriceDb`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: IndexMap<String, PriceEntry> =
            serde_json::from_str(json).map_err(|e| match e.classify() {
                Category::Data => AlaCartaError::InvalidPriceDb(e.to_string()),
                _ => AlaCartaError::Json(e),
            })?;

        Self::new(entries)
    }

    /// Entry stored under exactly `key`.
    pub fn get(&self, key: &str) -> Option<&PriceEntry> {
        self.entries.get(key)
    }

    pub fn get_key_value(&self, key: &str) -> Option<(&str, &PriceEntry)> {
        self.entries
            .get_key_value(key)
            .map(|(key, entry)| (key.as_str(), entry))
    }

    /// `(key, normalized key, entry)` in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &PriceEntry)> {
        self.entries
            .iter()
            .zip(&self.normalized_keys)
            .map(|((key, entry), normalized)| (key.as_str(), normalized.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
