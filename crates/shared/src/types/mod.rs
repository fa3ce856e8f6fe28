//! Common types used across the workspace.

pub mod amount;
pub mod options;

pub use amount::Amount;
pub use options::FormatOptions;
