//! Digit extraction.

/// Keeps only the ASCII digits of `text`.
///
/// Never returns an empty string: text without digits yields `"0"`.
#[must_use]
pub fn extract_digits(text: &str) -> String {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        "0".to_string()
    } else {
        digits
    }
}
