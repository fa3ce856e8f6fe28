//! Explicit classification of raw `format` input.
//!
//! Input is sorted into minor units, a numeric value, or free text before the
//! pipeline runs, instead of coercing strings to numbers opportunistically.

use moneyfield_shared::{Amount, FormatOptions};
use rust_decimal::Decimal;

use super::precision::clamp_precision;
use super::rescale::rescale_digits;

/// A value handed to `format`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Text as typed or pasted into a field.
    Text(String),
    /// A decimal number.
    Decimal(Decimal),
    /// An integer number.
    Integer(i128),
    /// An exact fixed-point value, e.g. the result of `unformat`.
    Amount(Amount),
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for RawInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Decimal> for RawInput {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<Amount> for RawInput {
    fn from(value: Amount) -> Self {
        Self::Amount(value)
    }
}

impl From<i32> for RawInput {
    fn from(value: i32) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<i64> for RawInput {
    fn from(value: i64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<u64> for RawInput {
    fn from(value: u64) -> Self {
        Self::Integer(i128::from(value))
    }
}

/// Floats are accepted at the boundary only and converted to `Decimal`
/// immediately. NaN and infinities carry no digits and become text.
impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        match Decimal::from_f64_retain(value) {
            Some(decimal) if value.is_finite() => Self::Decimal(decimal.normalize()),
            _ => Self::Text(value.to_string()),
        }
    }
}

/// The branch `format` takes for an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedInput {
    /// A canonical non-negative integer read as minor units (blank mode only).
    MinorUnits(String),
    /// A numeric value, not yet rounded.
    Numeric(Amount),
    /// Anything else; handled by stripping and digit extraction.
    Text(String),
}

impl ClassifiedInput {
    /// Renders the working string the text pipeline starts from.
    ///
    /// Minor units are rescaled, numeric values are rounded to the effective
    /// precision, and text is used verbatim.
    #[must_use]
    pub fn working_text(&self, precision: i64) -> String {
        match self {
            Self::MinorUnits(digits) => rescale_digits(digits, precision).to_string(),
            Self::Numeric(value) => value.round_to(clamp_precision(precision)).to_string(),
            Self::Text(text) => text.clone(),
        }
    }

    /// Returns the numeric value of the working string, if it has one.
    ///
    /// Free text has no numeric value.
    #[must_use]
    pub fn numeric_value(&self, precision: i64) -> Option<Amount> {
        match self {
            Self::MinorUnits(digits) => Some(rescale_digits(digits, precision)),
            Self::Numeric(value) => Some(value.round_to(clamp_precision(precision))),
            Self::Text(_) => None,
        }
    }
}

/// Sorts `input` into the branch `format` takes for it.
#[must_use]
pub fn classify(input: &RawInput, options: &FormatOptions) -> ClassifiedInput {
    if options.allow_blank {
        if let Some(digits) = canonical_non_negative_integer(input) {
            return ClassifiedInput::MinorUnits(digits);
        }
    }

    match input {
        RawInput::Text(text) => match Amount::parse(text) {
            Some(value) => ClassifiedInput::Numeric(value),
            None => ClassifiedInput::Text(text.clone()),
        },
        RawInput::Decimal(value) => ClassifiedInput::Numeric(Amount::from_decimal(*value)),
        RawInput::Integer(value) => ClassifiedInput::Numeric(Amount::from_integer(*value)),
        RawInput::Amount(value) => ClassifiedInput::Numeric(value.clone()),
    }
}

/// Returns the digits of a non-negative integer with no fractional part
/// present.
///
/// Text qualifies only in canonical form: ASCII digits, no sign, no
/// whitespace, no leading zero unless it is `"0"` itself.
fn canonical_non_negative_integer(input: &RawInput) -> Option<String> {
    match input {
        RawInput::Text(text) => is_normal_integer(text).then(|| text.clone()),
        RawInput::Integer(value) if *value >= 0 => Some(value.to_string()),
        RawInput::Decimal(value) if value.scale() == 0 && !value.is_sign_negative() => {
            Some(value.mantissa().to_string())
        }
        RawInput::Amount(value) if value.scale() == 0 && !value.is_negative() => {
            Some(value.minor_units().to_string())
        }
        _ => None,
    }
}

/// True for text such as `"0"` or `"500"`, false for `"0500"`, `"+5"`, `" 5"`.
#[must_use]
pub fn is_normal_integer(text: &str) -> bool {
    !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit())
        && (text == "0" || !text.starts_with('0'))
}
