//! Bidirectional codec between typed text and fixed-point currency values.
//!
//! `format` turns a number, numeric string, or partially typed text into a
//! display string; `unformat` recovers the value from a display string. Every
//! call is a pure function of its input and the `FormatOptions` passed in.
//!
//! Pipeline (leaves first):
//! - `clamp_precision`, `extract_digits`
//! - `rescale_digits_to_decimal`
//! - `pad_integer_part`, `group_thousands`
//! - `format`, `unformat`

pub mod affixes;
pub mod bounds;
pub mod digits;
pub mod format;
pub mod grouping;
pub mod input;
pub mod precision;
pub mod rescale;
pub mod unformat;

#[cfg(test)]
mod props;

pub use bounds::{below_min, clamp_to_bounds, exceeds_max};
pub use digits::extract_digits;
pub use format::{format, format_value};
pub use grouping::{group_thousands, join_integer_and_decimal, pad_integer_part};
pub use input::{ClassifiedInput, RawInput, classify, is_normal_integer};
pub use precision::{MAX_PRECISION, clamp_precision};
pub use rescale::{rescale_digits, rescale_digits_to_decimal};
pub use unformat::{unformat, unformat_decimal, unformat_value};
