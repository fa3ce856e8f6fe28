//! Sign detection and prefix/suffix stripping shared by both directions.

use moneyfield_shared::FormatOptions;

/// True if `text` contains a `-` and signs are enabled.
#[must_use]
pub fn detect_negative(text: &str, options: &FormatOptions) -> bool {
    !options.disable_negative && text.contains('-')
}

/// Removes the first literal occurrence of the prefix, then of the suffix.
///
/// Empty affixes remove nothing.
#[must_use]
pub fn strip_affixes(text: &str, options: &FormatOptions) -> String {
    let without_prefix = remove_first(text, &options.prefix);
    remove_first(&without_prefix, &options.suffix)
}

fn remove_first(text: &str, literal: &str) -> String {
    if literal.is_empty() {
        text.to_string()
    } else {
        text.replacen(literal, "", 1)
    }
}
