//! Configuration record of the currency codec.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Largest integer a double-precision number represents exactly.
const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Options shared by `format` and `unformat`.
///
/// Immutable per call; `FormatOptions::default()` is the explicit default
/// value, there is no ambient configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Literal text placed before the number.
    pub prefix: String,
    /// Literal text placed after the number.
    pub suffix: String,
    /// Joins the integer and decimal parts.
    pub decimal_separator: String,
    /// Groups integer digits in threes.
    pub thousands_separator: String,
    /// Requested fractional digit count; saturated into `[0, 20]` on use.
    pub precision: i64,
    /// Inclusive lower bound.
    pub min: Decimal,
    /// Inclusive upper bound.
    pub max: Decimal,
    /// Render zero as the empty string and read bare integers as minor units.
    pub allow_blank: bool,
    /// Ignore `-` on input and never emit a sign.
    pub disable_negative: bool,
    /// Minimum integer plus decimal digit count, padded with leading zeros.
    pub minimum_number_of_characters: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            precision: 2,
            min: Decimal::from(-MAX_SAFE_INTEGER),
            max: Decimal::from(MAX_SAFE_INTEGER),
            allow_blank: false,
            disable_negative: false,
            minimum_number_of_characters: 0,
        }
    }
}

impl FormatOptions {
    /// Sets the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets the decimal and thousands separators.
    #[must_use]
    pub fn with_separators(
        mut self,
        decimal: impl Into<String>,
        thousands: impl Into<String>,
    ) -> Self {
        self.decimal_separator = decimal.into();
        self.thousands_separator = thousands.into();
        self
    }

    /// Sets the requested precision.
    #[must_use]
    pub fn with_precision(mut self, precision: i64) -> Self {
        self.precision = precision;
        self
    }

    /// Sets both bounds.
    #[must_use]
    pub fn with_bounds(mut self, min: Decimal, max: Decimal) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Enables or disables blank zero rendering and the minor-units reading.
    #[must_use]
    pub fn with_allow_blank(mut self, allow_blank: bool) -> Self {
        self.allow_blank = allow_blank;
        self
    }

    /// Enables or disables sign handling.
    #[must_use]
    pub fn with_disable_negative(mut self, disable_negative: bool) -> Self {
        self.disable_negative = disable_negative;
        self
    }

    /// Sets the minimum digit count.
    #[must_use]
    pub fn with_minimum_number_of_characters(mut self, minimum: usize) -> Self {
        self.minimum_number_of_characters = minimum;
        self
    }

    /// Checks the options for combinations that cannot round-trip.
    ///
    /// The codec accepts any options; this is applied where configuration
    /// enters the system.
    pub fn validate(&self) -> AppResult<()> {
        if self.decimal_separator.is_empty() {
            return Err(AppError::Configuration(
                "decimal separator must not be empty".to_string(),
            ));
        }
        if self.decimal_separator == self.thousands_separator {
            return Err(AppError::Configuration(format!(
                "decimal and thousands separators must differ (both {:?})",
                self.decimal_separator
            )));
        }
        if self.min > self.max {
            return Err(AppError::Configuration(format!(
                "min {} is greater than max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}
