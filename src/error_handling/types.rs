//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use strum_macros::IntoStaticStr;
use thiserror::Error;

use crate::config::{
    EXIT_ERROR, MSG_EMBEDDED_SEPARATOR, MSG_NO_RECOVERY, MSG_RESOLVER_INIT, MSG_SERVER_FAILED,
};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Rejections raised while validating the TLD argument.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TldError {
    /// A separator followed by more characters, i.e. a multi-label name.
    #[error("{}", MSG_EMBEDDED_SEPARATOR)]
    EmbeddedSeparator,

    /// The label cannot be encoded as a DNS name (too long, bad characters).
    #[error("Invalid TLD {label:?}: {reason}")]
    InvalidLabel {
        /// The offending label
        label: String,
        /// Why the DNS library rejected it
        reason: String,
    },
}

/// Classified failure of a SOA query.
///
/// `NotFound` and `NoData` are negative answers: the name was resolved and the
/// TLD does not exist. Every other variant is an operational error.
#[derive(Error, Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum QueryFailure {
    /// Authoritative answer: name not found (NXDOMAIN).
    #[error("name not found")]
    NotFound,

    /// Valid name, no record of the requested type (NOERROR with an empty answer).
    #[error("no data of requested type")]
    NoData,

    /// Server failure, timeout, or no reachable nameserver.
    #[error("{}", MSG_SERVER_FAILED)]
    TryAgain,

    /// Non-recoverable protocol error (FORMERR, REFUSED, NOTIMP, ...).
    ///
    /// The detail is logged but not printed.
    #[error("{}", MSG_NO_RECOVERY)]
    NoRecovery(String),

    /// Anything the classifier does not recognise, with the raw code or message.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl QueryFailure {
    /// Returns `true` for answers that mean "this TLD does not exist".
    pub fn is_negative_answer(&self) -> bool {
        matches!(self, QueryFailure::NotFound | QueryFailure::NoData)
    }

    /// Variant name, for logs.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

/// Fatal errors of a single check. All of them end the process with [`EXIT_ERROR`].
#[derive(Error, Debug)]
pub enum CheckError {
    /// The argument is not a single-label TLD.
    #[error(transparent)]
    InvalidTld(#[from] TldError),

    /// No usable resolver configuration.
    #[error("{}", MSG_RESOLVER_INIT)]
    ResolverInit(#[source] InitializationError),

    /// The query failed for a reason other than a negative answer.
    #[error(transparent)]
    Query(QueryFailure),
}

impl CheckError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        EXIT_ERROR
    }
}
