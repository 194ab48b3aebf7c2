//! Fixed-point currency values
//!
//! Every balance and amount in the wallet is a decimal with exactly two
//! fraction digits. `Money` wraps a `rust_decimal::Decimal`, rounds on every
//! construction and arithmetic step, and serializes as a string such as
//! `"14235.34"` so no precision is lost on the wire.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of fraction digits carried by every monetary value
pub const MONEY_SCALE: u32 = 2;

/// Largest accepted transaction amount (`decimal(10, 2)` column bound)
pub const MAX_AMOUNT: Money = Money(Decimal::from_parts(
    1_410_065_407, // 9_999_999_999 cents = 2 * 2^32 + 1_410_065_407
    2,
    0,
    false,
    MONEY_SCALE,
));

/// Reasons a textual amount is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("'{0}' is not a decimal number")]
    Malformed(String),

    #[error("amount must not be negative, got {0}")]
    Negative(String),

    #[error("amount {0} exceeds the maximum of {max}", max = MAX_AMOUNT)]
    TooLarge(String),
}

/// A currency value rounded to two decimal places
///
/// Balances may be negative (transfers perform no sufficiency check); amounts
/// parsed through [`Money::parse_amount`] are always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// Zero, the default balance of new users and cards
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Build a value from a whole number of cents
    ///
    /// # Examples
    ///
    /// ```
    /// use wallet_ledger::types::Money;
    ///
    /// assert_eq!(Money::from_cents(1423534).to_string(), "14235.34");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, MONEY_SCALE))
    }

    /// Round an arbitrary decimal to two places, half away from zero
    pub fn from_decimal(value: Decimal) -> Self {
        Money(value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero))
    }

    /// The underlying decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Parse a transaction amount
    ///
    /// Accepts any decimal text (surrounding whitespace ignored), rounds it to
    /// two places and rejects negative values and values above
    /// [`MAX_AMOUNT`].
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] describing why the text is not a usable amount.
    pub fn parse_amount(text: &str) -> Result<Self, MoneyError> {
        let trimmed = text.trim();
        let raw = Decimal::from_str(trimmed)
            .map_err(|_| MoneyError::Malformed(trimmed.to_string()))?;
        // sign of the unrounded input: -0.004 must not slip through as 0.00
        if raw.is_sign_negative() && !raw.is_zero() {
            return Err(MoneyError::Negative(trimmed.to_string()));
        }
        let value = Money::from_decimal(raw);
        if value > MAX_AMOUNT {
            return Err(MoneyError::TooLarge(text.trim().to_string()));
        }
        Ok(value)
    }

    /// Add two values, rounding the result; `None` on decimal overflow
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money::from_decimal)
    }

    /// Subtract `other` from `self`, rounding the result; `None` on overflow
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money::from_decimal)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .map(Money::from_decimal)
            .map_err(|_| MoneyError::Malformed(trimmed.to_string()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0;
        value.rescale(MONEY_SCALE);
        // -0.00 prints as 0.00
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        write!(f, "{}", value)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        AmountInput::deserialize(deserializer)?
            .into_text()
            .parse()
            .map_err(de::Error::custom)
    }
}

/// A monetary value as supplied by a client: JSON string or JSON number
///
/// Handlers keep the raw text so the ledger performs the validation itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Text(String),
    Number(f64),
}

impl AmountInput {
    /// The amount as text, ready for [`Money::parse_amount`]
    pub fn into_text(self) -> String {
        match self {
            AmountInput::Text(text) => text,
            AmountInput::Number(number) => number.to_string(),
        }
    }

    /// Whether the client sent an empty string
    pub fn is_blank(&self) -> bool {
        matches!(self, AmountInput::Text(text) if text.trim().is_empty())
    }

    /// Whether the client sent the JSON number zero
    pub fn is_zero_number(&self) -> bool {
        matches!(self, AmountInput::Number(number) if *number == 0.0)
    }
}
