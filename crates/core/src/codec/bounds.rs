//! Bound predicates used by `format`.
//!
//! The two bounds are deliberately checked against different values:
//! `max` against the rescaled, unsigned digits, and `min` against the numeric
//! value of the input before stripping and digit extraction. Free text has no
//! numeric value, so it is never below `min`.

use moneyfield_shared::{Amount, FormatOptions};

use super::input::ClassifiedInput;

/// True if the rescaled value is greater than `options.max`.
#[must_use]
pub fn exceeds_max(rescaled: &Amount, options: &FormatOptions) -> bool {
    *rescaled > Amount::from_decimal(options.max)
}

/// True if the classified input's own numeric value is less than
/// `options.min`.
#[must_use]
pub fn below_min(input: &ClassifiedInput, options: &FormatOptions) -> bool {
    input
        .numeric_value(options.precision)
        .is_some_and(|value| value < Amount::from_decimal(options.min))
}

/// Applies both bounds: `max` first, `min` only when `max` did not fire.
///
/// A bound replaces the value literally.
#[must_use]
pub fn clamp_to_bounds(rescaled: Amount, input: &ClassifiedInput, options: &FormatOptions) -> Amount {
    if exceeds_max(&rescaled, options) {
        tracing::trace!(value = %rescaled, max = %options.max, "Clamped to max");
        Amount::from_decimal(options.max)
    } else if below_min(input, options) {
        tracing::trace!(value = %rescaled, min = %options.min, "Clamped to min");
        Amount::from_decimal(options.min)
    } else {
        rescaled
    }
}
