//! Application configuration and constants.
//!
//! This module provides:
//! - Exit statuses and fixed diagnostic messages
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
