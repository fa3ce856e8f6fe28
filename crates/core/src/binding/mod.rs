//! Boundary to the host UI layer.
//!
//! The codec never touches a widget. A platform layer implements
//! [`HostBinding`] for its own handle type; [`refresh_field`] drives it after
//! a keystroke.

pub mod field;

pub use field::{caret_offset, refresh_field};

/// Event name hosts dispatch when a committed value changed.
pub const CHANGE_EVENT: &str = "change";

/// Event name hosts dispatch while the user is typing.
pub const INPUT_EVENT: &str = "input";

/// Capabilities a host UI layer provides for a text field.
#[cfg_attr(test, mockall::automock(type Handle = u32;))]
pub trait HostBinding {
    /// Host-owned reference to a text field.
    type Handle;

    /// Places the caret at `offset` characters into the field.
    fn reposition_cursor(&mut self, handle: &Self::Handle, offset: usize);

    /// Tells the host the field's value changed.
    fn notify_changed(&mut self, handle: &Self::Handle);
}
