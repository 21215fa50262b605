//! Main application modules.
//!
//! This module provides the result classifier and the usage text used by the
//! binary.

pub mod outcome;
pub mod usage;

// Re-export public API
pub use outcome::{classify, Outcome};
pub use usage::{program_name, usage_text};
