//! Integer padding, thousands grouping, and part assembly.
//!
//! These operate on already-rescaled digit strings; none of them look at
//! signs, prefixes, or suffixes.

/// Inserts `separator` every three digits, counting from the right.
///
/// Never emits a leading separator. Only the integer part is ever grouped.
#[must_use]
pub fn group_thousands(integer_digits: &str, separator: &str) -> String {
    let len = integer_digits.chars().count();
    let mut grouped = String::with_capacity(integer_digits.len() + separator.len() * (len / 3));
    for (i, c) in integer_digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Left-pads `integer_digits` with zeros until the integer and decimal digit
/// counts together reach `minimum_total_chars`.
#[must_use]
pub fn pad_integer_part(
    integer_digits: &str,
    decimal_digits: &str,
    minimum_total_chars: usize,
) -> String {
    let current = integer_digits.chars().count() + decimal_digits.chars().count();
    let shortfall = minimum_total_chars.saturating_sub(current);
    format!("{}{integer_digits}", "0".repeat(shortfall))
}

/// Joins the parts, omitting the separator when there is no decimal part.
#[must_use]
pub fn join_integer_and_decimal(integer: &str, decimal: &str, separator: &str) -> String {
    if decimal.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}{separator}{decimal}")
    }
}
