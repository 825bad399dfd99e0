use std::fmt;

/// Ecuadorian supermarket chains the site quotes or badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    Tuti,
    Supermaxi,
    Tia,
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Store::Tuti => "Tuti",
            Store::Supermaxi => "Supermaxi",
            Store::Tia => "TIA",
        };
        f.write_str(name)
    }
}

/// A single reference price at one store.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub store: Store,
    pub amount: f64,
    pub unit: String,
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ${:.2}/{}", self.store, self.amount, self.unit)
    }
}
