//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, argument validation, query failures)
//! - Categorization of resolver errors into query failures
//!
//! Query failures are split into:
//! - **Negative answers**: NXDOMAIN or NODATA, reported as "does not exist"
//! - **Operational errors**: everything else, reported on stderr

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_resolve_error, categorize_response_code};
pub use types::{CheckError, InitializationError, QueryFailure, TldError};
