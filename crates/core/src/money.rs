use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A monetary amount with no currency attached. Receipts carry a single
/// symbol at most, so the engine never needs to know which one.
///
/// Serialized as a plain JSON number (`12.5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    pub fn from_decimal(decimal: Decimal) -> Self {
        Money(decimal.round_dp(2))
    }

    /// Parse a token as printed on a receipt: `12.50`, `$12.5`, `$ 1,234.56`.
    /// Anything that does not read as a plain number with at most two
    /// decimal places yields `None`.
    pub fn parse(token: &str) -> Option<Self> {
        let trimmed = token.trim();
        let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();
        if unsigned.is_empty() || unsigned.starts_with(['-', '+']) {
            return None;
        }
        let clean = unsigned.replace(',', "");
        let decimal = Decimal::from_str(&clean).ok()?;
        if decimal.scale() > 2 {
            return None;
        }
        Some(Money(decimal))
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Money::from_decimal)
    }
}
