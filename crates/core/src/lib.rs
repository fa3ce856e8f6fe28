//! Currency field codec for Moneyfield.
//!
//! This crate contains the pure formatting logic with ZERO UI dependencies.
//!
//! # Modules
//!
//! - `codec` - `format` / `unformat` and the helpers they compose
//! - `binding` - Boundary trait implemented by host UI layers

pub mod binding;
pub mod codec;

pub use binding::{HostBinding, refresh_field};
pub use codec::{format, format_value, unformat, unformat_decimal, unformat_value};
pub use moneyfield_shared::{Amount, FormatOptions};
