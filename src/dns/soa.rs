//! SOA record query.
//!
//! Issues the single SOA question for a TLD and returns either the number of
//! records received or a categorized failure.

use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::TokioAsyncResolver;
use log::debug;

use crate::error_handling::{categorize_resolve_error, QueryFailure};
use crate::tld::Tld;

/// Successful SOA lookup.
///
/// The records themselves are not inspected: any answer counts as proof that
/// the zone exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoaAnswer {
    /// Number of records in the answer
    pub records: usize,
}

/// Queries the SOA record (class IN) of a TLD.
///
/// # Arguments
///
/// * `tld` - The validated TLD
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// `Ok(SoaAnswer)` when at least one record came back, otherwise the
/// categorized `QueryFailure`.
pub async fn query_soa(tld: &Tld, resolver: &TokioAsyncResolver) -> Result<SoaAnswer, QueryFailure> {
    let name = tld.query_name().clone();
    debug!("Querying SOA for {name}");

    match resolver.lookup(name.clone(), RecordType::SOA).await {
        Ok(lookup) => {
            let records = lookup.records().len();
            debug!("SOA lookup for {name} returned {records} record(s)");
            if records == 0 {
                Err(QueryFailure::NoData)
            } else {
                Ok(SoaAnswer { records })
            }
        }
        Err(e) => {
            let failure = categorize_resolve_error(&e);
            debug!("SOA lookup for {name} failed ({}): {e}", failure.kind());
            Err(failure)
        }
    }
}
