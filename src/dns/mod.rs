//! DNS querying.
//!
//! This module provides the async SOA lookup using `hickory-resolver`. Failures
//! are returned as a [`QueryFailure`](crate::error_handling::QueryFailure) value
//! rather than inspected from resolver state afterwards.

mod soa;

// Re-export public API
pub use soa::{query_soa, SoaAnswer};
