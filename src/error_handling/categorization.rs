//! Resolver error categorization.
//!
//! Turns `hickory-resolver` errors into a [`QueryFailure`] so the result of a
//! query can be matched on directly.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;

use super::types::QueryFailure;

/// Categorizes a DNS response code carried by a failed lookup.
///
/// NXDOMAIN and an empty NOERROR are negative answers. SERVFAIL is transient.
/// Every other code the protocol defines is non-recoverable, and codes outside
/// the registry are reported raw.
pub fn categorize_response_code(code: ResponseCode) -> QueryFailure {
    match code {
        ResponseCode::NXDomain => QueryFailure::NotFound,
        ResponseCode::NoError => QueryFailure::NoData,
        ResponseCode::ServFail => QueryFailure::TryAgain,
        ResponseCode::Unknown(raw) => QueryFailure::Unknown(raw.to_string()),
        other => QueryFailure::NoRecovery(format!("{other:?} ({})", u16::from(other))),
    }
}

/// Categorizes a `hickory_resolver` error into a [`QueryFailure`].
///
/// # Arguments
///
/// * `error` - The error returned by `lookup`
///
/// # Returns
///
/// The failure kind used to pick the program outcome.
pub fn categorize_resolve_error(error: &ResolveError) -> QueryFailure {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            categorize_response_code(*response_code)
        }
        ResolveErrorKind::Timeout | ResolveErrorKind::NoConnections | ResolveErrorKind::Io(_) => {
            QueryFailure::TryAgain
        }
        ResolveErrorKind::Proto(proto) => match proto.kind() {
            ProtoErrorKind::Timeout | ProtoErrorKind::Io(_) => QueryFailure::TryAgain,
            _ => QueryFailure::NoRecovery(proto.to_string()),
        },
        _ => QueryFailure::Unknown(error.to_string()),
    }
}
