//! Fixed-point rescaling of minor units.

use moneyfield_shared::Amount;

use super::precision::clamp_precision;

/// Reads `digits` as minor units and divides by `10^precision`.
///
/// The result always carries exactly `clamp_precision(precision)`
/// fractional digits. The division is positional, so no rounding ever
/// happens here; a precision above the supported maximum behaves exactly like
/// the maximum.
#[must_use]
pub fn rescale_digits_to_decimal(digits: &str, precision: i64) -> String {
    rescale_digits(digits, precision).to_string()
}

/// Same as [`rescale_digits_to_decimal`], keeping the exact value.
#[must_use]
pub fn rescale_digits(digits: &str, precision: i64) -> Amount {
    Amount::from_minor_units(digits, clamp_precision(precision))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("123450", 2, "1234.50")]
    #[case("5", 2, "0.05")]
    #[case("0", 2, "0.00")]
    #[case("000500", 2, "5.00")]
    #[case("500", 0, "500")]
    #[case("500", -3, "500")]
    #[case("7", 4, "0.0007")]
    #[case("1", 999, "0.00000000000000000001")]
    fn test_rescale(#[case] digits: &str, #[case] precision: i64, #[case] expected: &str) {
        assert_eq!(rescale_digits_to_decimal(digits, precision), expected);
    }

    #[test]
    fn test_rescale_keeps_every_typed_digit() {
        let digits = "123456789012345678901234567890123456789";
        let rescaled = rescale_digits_to_decimal(digits, 20);
        assert_eq!(rescaled, "1234567890123456789.01234567890123456789");
    }
}
