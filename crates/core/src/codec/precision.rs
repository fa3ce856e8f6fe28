//! Precision clamp.
//!
//! Fixed-decimal rendering supports at most 20 fractional digits; every
//! component that renders a number applies this clamp first.

/// Largest supported number of fractional digits.
pub const MAX_PRECISION: u32 = 20;

/// Saturates a requested precision into `[0, MAX_PRECISION]`.
///
/// Out-of-range input is never rejected.
#[must_use]
pub fn clamp_precision(precision: i64) -> u32 {
    u32::try_from(precision.clamp(0, i64::from(MAX_PRECISION))).unwrap_or(MAX_PRECISION)
}
