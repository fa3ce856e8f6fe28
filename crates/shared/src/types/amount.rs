//! Exact fixed-point currency value.
//!
//! CRITICAL: Never use floating-point for money formatting.
//! `Amount` wraps `bigdecimal::BigDecimal` so any number of digits a user can
//! type into a field is represented exactly, with no overflow path.
//! `rust_decimal::Decimal` is used at the edges (input and `to_decimal`).

use std::fmt;
use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode, Signed, Zero};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Largest scale magnitude a parsed literal may carry (`1e1000`, `1e-1000`).
pub const MAX_LITERAL_SCALE: u64 = 1_000;

/// A signed decimal value with a fixed number of fractional digits.
///
/// The scale is never negative. Equality and ordering are numeric, so
/// `1.50 == 1.5`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(BigDecimal);

impl Amount {
    /// Creates a zero amount with `scale` fractional digits.
    #[must_use]
    pub fn zero(scale: u32) -> Self {
        Self(BigDecimal::new(BigInt::zero(), i64::from(scale)))
    }

    /// Creates a non-negative amount from a count of minor units.
    ///
    /// Characters other than ASCII digits are ignored; no digits means zero.
    #[must_use]
    pub fn from_minor_units(digits: &str, scale: u32) -> Self {
        let digits: String = digits.chars().filter(char::is_ascii_digit).collect();
        match digits.parse::<BigInt>() {
            Ok(units) => Self(BigDecimal::new(units, i64::from(scale))),
            Err(_) => Self::zero(scale),
        }
    }

    /// Converts a `Decimal` exactly, keeping its scale.
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Self {
        Self(BigDecimal::new(
            BigInt::from(value.mantissa()),
            i64::from(value.scale()),
        ))
    }

    /// Converts an integer exactly (scale 0).
    #[must_use]
    pub fn from_integer(value: i128) -> Self {
        Self(BigDecimal::new(BigInt::from(value), 0))
    }

    /// Parses a decimal literal exactly.
    ///
    /// Accepts surrounding whitespace, an optional sign, digits with at most one
    /// `.` (at least one digit overall), and an optional exponent
    /// (`e`/`E`, optional sign, digits). An empty or blank string is zero.
    /// Returns `None` for anything else, including hex, `NaN` and `Infinity`,
    /// and for scales beyond [`MAX_LITERAL_SCALE`].
    #[must_use]
    pub fn parse(literal: &str) -> Option<Self> {
        let text = literal.trim();
        if text.is_empty() {
            return Some(Self::zero(0));
        }
        // BigDecimal also takes `_` digit separators; a typed literal may not.
        if !text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'))
        {
            return None;
        }

        let value = BigDecimal::from_str(text).ok()?;
        let (_, scale) = value.as_bigint_and_exponent();
        if scale.unsigned_abs() > MAX_LITERAL_SCALE {
            return None;
        }
        Some(Self(if scale < 0 { value.with_scale(0) } else { value }))
    }

    /// Returns the number of fractional digits.
    #[must_use]
    pub fn scale(&self) -> u32 {
        let (_, scale) = self.0.as_bigint_and_exponent();
        u32::try_from(scale).unwrap_or(0)
    }

    /// Returns the magnitude in minor units.
    #[must_use]
    pub fn minor_units(&self) -> String {
        let (units, _) = self.0.as_bigint_and_exponent();
        units.magnitude().to_string()
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Returns the amount with the opposite sign.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self(-self.0.clone())
    }

    /// Returns the magnitude of the amount.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the amount with the given sign. Zero stays non-negative.
    #[must_use]
    pub fn with_sign(&self, negative: bool) -> Self {
        if negative == self.is_negative() || self.is_zero() {
            self.clone()
        } else {
            self.negate()
        }
    }

    /// Returns the amount with exactly `scale` fractional digits.
    ///
    /// Growing the scale pads with zeros. Shrinking it rounds half away from
    /// zero, the behavior of fixed-decimal conversion on an exact decimal.
    #[must_use]
    pub fn round_to(&self, scale: u32) -> Self {
        Self(
            self.0
                .with_scale_round(i64::from(scale), RoundingMode::HalfUp),
        )
    }

    /// Returns the integer digits of the magnitude (at least `"0"`).
    #[must_use]
    pub fn integer_digits(&self) -> String {
        let plain = self.abs().0.to_plain_string();
        match plain.split_once('.') {
            Some((integer, _)) => integer.to_string(),
            None => plain,
        }
    }

    /// Returns exactly `scale` fractional digits of the magnitude.
    #[must_use]
    pub fn fraction_digits(&self) -> String {
        self.abs()
            .0
            .to_plain_string()
            .split_once('.')
            .map(|(_, fraction)| fraction.to_string())
            .unwrap_or_default()
    }

    /// Converts to `Decimal`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Overflow` if the value needs more digits than a
    /// `Decimal` holds.
    pub fn to_decimal(&self) -> AppResult<Decimal> {
        Decimal::from_str_exact(&self.to_string())
            .map_err(|e| AppError::Overflow(format!("{self} does not fit a decimal: {e}")))
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero(0)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

/// Plain fixed notation, never exponent form: `-1234.50`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_plain_string())
    }
}

impl FromStr for Amount {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(AppError::InvalidInput("empty amount".to_string()));
        }
        Self::parse(s).ok_or_else(|| AppError::InvalidInput(format!("not a decimal number: {s}")))
    }
}

impl TryFrom<String> for Amount {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Amount> for String {
    fn from(value: Amount) -> Self {
        value.to_string()
    }
}
