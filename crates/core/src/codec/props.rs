//! Property-based tests for the currency codec.
//!
//! - Property 1: Round trip
//! - Property 2: Idempotence
//! - Property 3: Precision saturation
//! - Property 4: Total, well-formed output

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use moneyfield_shared::FormatOptions;

use super::format::{format, format_value};
use super::grouping::group_thousands;
use super::precision::clamp_precision;
use super::unformat::{unformat, unformat_value};

/// Strategy to generate amounts from -10,000,000.0000 to 10,000,000.0000.
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000_000i64..100_000_000_000i64, 0u32..=4)
        .prop_map(|(units, scale)| Decimal::new(units, scale))
}

/// Strategy to generate a precision the codec renders directly (0 to 6).
fn precision() -> impl Strategy<Value = i64> {
    0i64..=6
}

/// Strategy to generate non-conflicting separator pairs.
fn separators() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop_oneof![
        Just((".", ",")),
        Just((",", ".")),
        Just((".", " ")),
        Just((",", "'")),
        Just((".", "")),
    ]
}

/// Strategy to generate prefixes and suffixes without digits or `-`.
fn affixes() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop_oneof![
        Just(("", "")),
        Just(("$", "")),
        Just(("R$ ", "")),
        Just(("", " USD")),
        Just(("€", " EUR")),
    ]
}

/// Strategy to generate options with blank mode off and default bounds.
fn options() -> impl Strategy<Value = FormatOptions> {
    (precision(), separators(), affixes(), 0usize..12, any::<bool>()).prop_map(
        |(precision, (decimal, thousands), (prefix, suffix), minimum, disable_negative)| {
            FormatOptions::default()
                .with_precision(precision)
                .with_separators(decimal, thousands)
                .with_prefix(prefix)
                .with_suffix(suffix)
                .with_minimum_number_of_characters(minimum)
                .with_disable_negative(disable_negative)
        },
    )
}

/// Expected value after a round trip: rounded, sign dropped when disabled.
fn expected_round_trip(x: Decimal, options: &FormatOptions) -> Decimal {
    let rounded = x.round_dp_with_strategy(
        clamp_precision(options.precision),
        RoundingStrategy::MidpointAwayFromZero,
    );
    if options.disable_negative { rounded.abs() } else { rounded }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Property 1: Round trip
    // =========================================================================

    /// *For any* in-range value, `unformat(format(x))` equals `x` rounded to
    /// the effective precision.
    #[test]
    fn prop_round_trip(x in amount(), options in options()) {
        let shown = format(Some(x), &options);
        let back = unformat(shown.as_deref(), &options).unwrap();
        prop_assert_eq!(
            back.to_decimal().unwrap(),
            expected_round_trip(x, &options),
            "{} -> {:?}",
            x,
            shown
        );
    }

    // =========================================================================
    // Property 2: Idempotence
    // =========================================================================

    /// *For any* in-range value, formatting what `unformat` recovered
    /// reproduces the same display string.
    #[test]
    fn prop_format_is_idempotent(x in amount(), options in options()) {
        let shown = format_value(x, &options);
        let back = unformat_value(&shown, &options);
        prop_assert_eq!(format_value(back, &options), shown);
    }

    /// *For any* display string, reformatting it as typed text is a no-op.
    #[test]
    fn prop_reformatting_display_text_is_stable(x in amount(), options in options()) {
        // Without affixes, "1.234" under a comma decimal separator reads as a
        // plain decimal literal and is rounded instead of re-grouped.
        prop_assume!(
            options.decimal_separator == "."
                || !options.prefix.is_empty()
                || !options.suffix.is_empty()
        );
        let shown = format_value(x, &options);
        prop_assert_eq!(format_value(shown.as_str(), &options), shown);
    }

    // =========================================================================
    // Property 3: Precision saturation
    // =========================================================================

    /// *For any* precision above 20, output equals output at precision 20.
    #[test]
    fn prop_precision_saturates(
        text in "[-$0-9.,]{0,30}",
        requested in 21i64..10_000,
    ) {
        let wide = FormatOptions::default().with_precision(requested);
        let twenty = FormatOptions::default().with_precision(20);
        prop_assert_eq!(format_value(text.as_str(), &wide), format_value(text.as_str(), &twenty));
        prop_assert_eq!(unformat_value(&text, &wide), unformat_value(&text, &twenty));
    }

    // =========================================================================
    // Property 4: Total, well-formed output
    // =========================================================================

    /// *For any* typed text, the output has exactly the effective precision in
    /// fractional digits and only digits, separators, and an optional sign.
    #[test]
    fn prop_output_is_well_formed(text in "\\PC{0,40}", precision in -3i64..30) {
        let options = FormatOptions::default().with_precision(precision);
        let shown = format_value(text.as_str(), &options);
        let unsigned = shown.strip_prefix('-').unwrap_or(&shown);
        let effective = clamp_precision(precision) as usize;

        match unsigned.split_once('.') {
            Some((integer, fraction)) => {
                prop_assert_eq!(fraction.len(), effective);
                prop_assert!(fraction.bytes().all(|b| b.is_ascii_digit()));
                prop_assert!(integer.bytes().all(|b| b.is_ascii_digit() || b == b','));
            }
            None => {
                prop_assert_eq!(effective, 0);
                prop_assert!(unsigned.bytes().all(|b| b.is_ascii_digit() || b == b','));
            }
        }
    }

    /// *For any* digit string, grouping only inserts separators between
    /// groups of three.
    #[test]
    fn prop_grouping_shape(digits in "[0-9]{1,40}") {
        let grouped = group_thousands(&digits, ",");
        prop_assert_eq!(grouped.replace(',', ""), digits.clone());

        let groups: Vec<&str> = grouped.split(',').collect();
        prop_assert!((1..=3).contains(&groups[0].len()));
        prop_assert!(groups[1..].iter().all(|g| g.len() == 3));
    }

    /// *For any* options, absent input stays absent.
    #[test]
    fn prop_none_propagates(options in options(), allow_blank in any::<bool>()) {
        let options = options.with_allow_blank(allow_blank);
        prop_assert!(format(None::<&str>, &options).is_none());
        prop_assert!(unformat(None, &options).is_none());
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_expected_round_trip_helper() {
        let options = FormatOptions::default();
        assert_eq!(expected_round_trip(dec!(1.005), &options), dec!(1.01));
        assert_eq!(expected_round_trip(dec!(-1.005), &options), dec!(-1.01));

        let unsigned = options.with_disable_negative(true);
        assert_eq!(expected_round_trip(dec!(-1.005), &unsigned), dec!(1.01));
    }
}
