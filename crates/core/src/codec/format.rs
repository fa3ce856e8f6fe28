//! Raw value to display string.

use moneyfield_shared::FormatOptions;

use super::affixes::{detect_negative, strip_affixes};
use super::bounds::clamp_to_bounds;
use super::digits::extract_digits;
use super::grouping::{group_thousands, join_integer_and_decimal, pad_integer_part};
use super::input::{RawInput, classify};
use super::precision::clamp_precision;
use super::rescale::rescale_digits;

/// Formats a value for display; `None` stays `None`.
///
/// # Example
///
/// ```
/// use moneyfield_core::codec::format;
/// use moneyfield_shared::FormatOptions;
/// use rust_decimal_macros::dec;
///
/// let options = FormatOptions::default().with_prefix("$");
/// assert_eq!(format(Some(dec!(1234.5)), &options).as_deref(), Some("$1,234.50"));
/// assert_eq!(format(None::<&str>, &options), None);
/// ```
#[must_use]
pub fn format<I: Into<RawInput>>(input: Option<I>, options: &FormatOptions) -> Option<String> {
    input.map(|value| format_value(value, options))
}

/// Formats a present value for display.
///
/// Never fails: text without digits formats as zero, out-of-range values are
/// clamped, and out-of-range precision is saturated.
#[must_use]
pub fn format_value(input: impl Into<RawInput>, options: &FormatOptions) -> String {
    let input = input.into();
    let precision = clamp_precision(options.precision);

    let classified = classify(&input, options);
    let working = classified.working_text(options.precision);
    tracing::trace!(?classified, %working, "Classified format input");

    let negative = detect_negative(&working, options);
    let digits = extract_digits(&strip_affixes(&working, options));
    let rescaled = rescale_digits(&digits, options.precision);

    let rendered = clamp_to_bounds(rescaled, &classified, options).round_to(precision);
    if rendered.is_zero() && options.allow_blank {
        return String::new();
    }

    let decimal = rendered.fraction_digits();
    let integer = pad_integer_part(
        &rendered.integer_digits(),
        &decimal,
        options.minimum_number_of_characters,
    );
    let integer = group_thousands(&integer, &options.thousands_separator);

    format!(
        "{}{}{}{}",
        options.prefix,
        if negative { "-" } else { "" },
        join_integer_and_decimal(&integer, &decimal, &options.decimal_separator),
        options.suffix
    )
}
