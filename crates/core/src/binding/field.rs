//! Reformatting a field in place.

use moneyfield_shared::FormatOptions;

use super::HostBinding;
use crate::codec::format_value;

/// Caret position at the end of the numeric part of `formatted`.
#[must_use]
pub fn caret_offset(formatted: &str, options: &FormatOptions) -> usize {
    let total = formatted.chars().count();
    if formatted.ends_with(options.suffix.as_str()) {
        total - options.suffix.chars().count()
    } else {
        total
    }
}

/// Formats the field's current text and, if the display changed, moves the
/// caret and notifies the host.
///
/// Returns the new display text, or `None` when the field has no value.
pub fn refresh_field<B: HostBinding>(
    binding: &mut B,
    handle: &B::Handle,
    current: Option<&str>,
    options: &FormatOptions,
) -> Option<String> {
    let current = current?;
    let formatted = format_value(current, options);

    if formatted != current {
        let offset = caret_offset(&formatted, options);
        tracing::trace!(%current, %formatted, offset, "Field reformatted");
        binding.reposition_cursor(handle, offset);
        binding.notify_changed(handle);
    }

    Some(formatted)
}
