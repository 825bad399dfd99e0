use crate::error::{AlaCartaError, Result};

/// A leading ingredient quantity, one variant per accepted notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    /// `2`
    Integer(u64),
    /// `1.5` or `1,5`
    Decimal(f64),
    /// `1/2`
    Fraction { numerator: u64, denominator: u64 },
    /// `1 1/2`
    MixedNumber {
        whole: u64,
        numerator: u64,
        denominator: u64,
    },
    /// No usable number at the start of the text.
    Unparsed,
}

impl Quantity {
    /// Parse a quantity from the very start of `text`.
    ///
    /// Returns the quantity together with the text that follows it, untouched,
    /// so any whitespace between the number and the unit survives. Mixed
    /// numbers take priority over fractions, and fractions over plain
    /// decimals. A zero denominator is `Unparsed` and consumes nothing.
    pub fn parse(text: &str) -> (Quantity, &str) {
        let parsed = parse_mixed_number(text)
            .or_else(|| parse_fraction(text))
            .or_else(|| parse_decimal(text));

        match parsed {
            Some((quantity, rest)) if quantity.value().is_some() => (quantity, rest),
            _ => (Quantity::Unparsed, text),
        }
    }

    /// Numeric value, or `None` for `Unparsed` and zero denominators.
    pub fn value(&self) -> Option<f64> {
        match *self {
            Quantity::Integer(n) => Some(n as f64),
            Quantity::Decimal(d) => Some(d),
            Quantity::Fraction {
                numerator,
                denominator,
            } => (denominator != 0).then(|| numerator as f64 / denominator as f64),
            Quantity::MixedNumber {
                whole,
                numerator,
                denominator,
            } => (denominator != 0).then(|| whole as f64 + numerator as f64 / denominator as f64),
            Quantity::Unparsed => None,
        }
    }
}

/// Leading ASCII digits of `text` as a number, plus the rest.
fn take_digits(text: &str) -> Option<(u64, &str)> {
    let len = text.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let value = text[..len].parse().ok()?;
    Some((value, &text[len..]))
}

fn parse_fraction(text: &str) -> Option<(Quantity, &str)> {
    let (numerator, rest) = take_digits(text)?;
    let rest = rest.strip_prefix('/')?;
    let (denominator, rest) = take_digits(rest)?;
    Some((
        Quantity::Fraction {
            numerator,
            denominator,
        },
        rest,
    ))
}

fn parse_mixed_number(text: &str) -> Option<(Quantity, &str)> {
    let (whole, rest) = take_digits(text)?;
    let after_space = rest.trim_start_matches([' ', '\t']);
    if after_space.len() == rest.len() {
        return None;
    }
    match parse_fraction(after_space)? {
        (
            Quantity::Fraction {
                numerator,
                denominator,
            },
            rest,
        ) => Some((
            Quantity::MixedNumber {
                whole,
                numerator,
                denominator,
            },
            rest,
        )),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<(Quantity, &str)> {
    let int_len = text.bytes().take_while(u8::is_ascii_digit).count();
    if int_len == 0 {
        return None;
    }

    let after_int = &text[int_len..];
    let frac_len = match after_int.as_bytes() {
        [b'.' | b',', rest @ ..] => rest.iter().take_while(|b| b.is_ascii_digit()).count(),
        _ => 0,
    };

    if frac_len == 0 {
        return match take_digits(text) {
            Some((value, rest)) => Some((Quantity::Integer(value), rest)),
            // Too long for u64
            None => {
                let value: f64 = text[..int_len].parse().ok()?;
                Some((Quantity::Decimal(value), after_int))
            }
        };
    }

    let end = int_len + 1 + frac_len;
    let value: f64 = text[..end].replace(',', ".").parse().ok()?;
    Some((Quantity::Decimal(value), &text[end..]))
}

/// Render a scaled amount: at most one decimal, no trailing `,0`, comma separator.
pub fn format_quantity(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{:.1}", rounded).replace('.', ",")
    }
}

/// Multiplier applied to a recipe, `target servings / base servings`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleRatio(f64);

impl ScaleRatio {
    pub const IDENTITY: ScaleRatio = ScaleRatio(1.0);

    /// Fails with `InvalidRatio` unless `ratio` is finite and positive.
    pub fn new(ratio: f64) -> Result<Self> {
        if ratio.is_finite() && ratio > 0.0 {
            Ok(Self(ratio))
        } else {
            Err(AlaCartaError::InvalidRatio(ratio))
        }
    }

    pub fn from_servings(target: u32, base: u32) -> Result<Self> {
        if base == 0 {
            return Err(AlaCartaError::InvalidRatio(f64::INFINITY));
        }
        Self::new(f64::from(target) / f64::from(base))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn is_identity(self) -> bool {
        self.0 == 1.0
    }
}
