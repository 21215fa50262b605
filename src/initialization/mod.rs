//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a check:
//! - Logger (plain or JSON, always on stderr)
//! - DNS resolver (system configuration or an explicit `resolv.conf`)
//!
//! All initialization functions return proper error types for error handling.

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::{init_resolver, init_resolver_with};
