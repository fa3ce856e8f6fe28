//! Display string back to a numeric value.

use moneyfield_shared::{Amount, AppResult, FormatOptions};
use rust_decimal::Decimal;

use super::affixes::{detect_negative, strip_affixes};
use super::digits::extract_digits;
use super::rescale::rescale_digits;

/// Recovers the value shown by a display string; `None` stays `None`.
///
/// The result carries exactly the effective precision in fractional digits.
/// No bounds are applied here.
#[must_use]
pub fn unformat(input: Option<&str>, options: &FormatOptions) -> Option<Amount> {
    input.map(|text| unformat_value(text, options))
}

/// Recovers the value shown by a present display string.
#[must_use]
pub fn unformat_value(text: &str, options: &FormatOptions) -> Amount {
    let negative = detect_negative(text, options);
    let digits = extract_digits(&strip_affixes(text, options));
    let value = rescale_digits(&digits, options.precision).with_sign(negative);
    tracing::trace!(%text, %value, "Unformatted display text");
    value
}

/// Like [`unformat`], converted to `Decimal`.
///
/// # Errors
///
/// Returns `AppError::Overflow` when the typed digits do not fit a `Decimal`.
pub fn unformat_decimal(input: Option<&str>, options: &FormatOptions) -> AppResult<Option<Decimal>> {
    unformat(input, options).map(|value| value.to_decimal()).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneyfield_shared::AppError;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn dollars() -> FormatOptions {
        FormatOptions::default().with_prefix("$")
    }

    #[test]
    fn test_none_propagates() {
        assert_eq!(unformat(None, &dollars()), None);
        assert!(unformat_decimal(None, &dollars()).unwrap().is_none());
    }

    #[rstest]
    #[case("$1,234.50", dec!(1234.50))]
    #[case("$-1,234.50", dec!(-1234.50))]
    #[case("-$0.07", dec!(-0.07))]
    #[case("$0.00", dec!(0))]
    #[case("", dec!(0))]
    #[case("garbage", dec!(0))]
    #[case("12", dec!(0.12))]
    fn test_unformat(#[case] text: &str, #[case] expected: Decimal) {
        let value = unformat_decimal(Some(text), &dollars()).unwrap().unwrap();
        assert_eq!(value, expected);
    }

    #[test]
    fn test_result_has_effective_precision() {
        let value = unformat_value("$1,234.5", &dollars());
        assert_eq!(value.scale(), 2);
        assert_eq!(value.to_string(), "123.45");

        let wide = FormatOptions::default().with_precision(999);
        assert_eq!(unformat_value("1", &wide).scale(), 20);
    }

    #[test]
    fn test_negative_zero_collapses() {
        let value = unformat_value("-$0.00", &dollars());
        assert!(value.is_zero());
        assert!(!value.is_negative());
    }

    #[test]
    fn test_disable_negative() {
        let options = dollars().with_disable_negative(true);
        assert_eq!(unformat_value("$-5.00", &options).to_string(), "5.00");
    }

    #[test]
    fn test_suffix_and_custom_separators() {
        let options = FormatOptions::default()
            .with_suffix(" €")
            .with_separators(",", ".");
        assert_eq!(unformat_value("1.234,56 €", &options).to_string(), "1234.56");
    }

    #[test]
    fn test_no_clamping() {
        let options = FormatOptions::default().with_bounds(dec!(0), dec!(100));
        assert_eq!(unformat_value("999.99", &options).to_string(), "999.99");
        assert_eq!(unformat_value("-5.00", &options).to_string(), "-5.00");
    }

    #[test]
    fn test_overflow_only_on_decimal_conversion() {
        let long = "9".repeat(40);
        let value = unformat_value(&long, &dollars());
        assert_eq!(value.minor_units(), long);
        assert!(matches!(
            unformat_decimal(Some(long.as_str()), &dollars()),
            Err(AppError::Overflow(_))
        ));
    }
}
