//! Shared types, errors, and configuration for Moneyfield.
//!
//! This crate provides common types used across all other crates:
//! - `Amount`, an exact fixed-point currency value
//! - `FormatOptions`, the configuration record of the currency codec
//! - Application-wide error types
//! - Layered configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LoggingConfig};
pub use error::{AppError, AppResult};
pub use types::{Amount, FormatOptions};
