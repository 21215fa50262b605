//! Result classification.
//!
//! Maps the result of the SOA query to the final outcome of a check.

use std::fmt;

use log::{debug, info};

use crate::config::{EXIT_DOES_NOT_EXIST, EXIT_EXISTS};
use crate::dns::SoaAnswer;
use crate::error_handling::{CheckError, QueryFailure};
use crate::tld::Tld;

/// Non-error outcome of a check. Printed to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The SOA query returned data.
    Exists {
        /// The TLD as typed by the user
        tld: String,
    },
    /// NXDOMAIN or NODATA.
    DoesNotExist {
        /// The TLD as typed by the user
        tld: String,
    },
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Exists { .. } => EXIT_EXISTS,
            Outcome::DoesNotExist { .. } => EXIT_DOES_NOT_EXIST,
        }
    }

    /// Whether the TLD was found.
    pub fn exists(&self) -> bool {
        matches!(self, Outcome::Exists { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Exists { tld } => write!(f, "TLD \"{tld}\" exists"),
            Outcome::DoesNotExist { tld } => write!(f, "TLD \"{tld}\" does not exist"),
        }
    }
}

/// Classifies a query result.
///
/// Negative answers become `Outcome::DoesNotExist`; every other failure is an
/// operational error. The SOA data itself is not compared with the question.
///
/// # Errors
///
/// Returns `CheckError::Query` for transient, non-recoverable, and unknown failures.
pub fn classify(tld: &Tld, result: Result<SoaAnswer, QueryFailure>) -> Result<Outcome, CheckError> {
    let tld_text = tld.as_str().to_string();
    match result {
        Ok(answer) => {
            info!("{} answered with {} record(s)", tld.query_name(), answer.records);
            Ok(Outcome::Exists { tld: tld_text })
        }
        Err(failure) if failure.is_negative_answer() => {
            info!("{} has no SOA ({})", tld.query_name(), failure);
            Ok(Outcome::DoesNotExist { tld: tld_text })
        }
        Err(failure) => {
            debug!("Treating {} as an operational error", failure.kind());
            Err(CheckError::Query(failure))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EXIT_ERROR;

    fn tld(s: &str) -> Tld {
        Tld::parse(s).unwrap()
    }

    #[test]
    fn test_positive_answer_exists() {
        let outcome = classify(&tld("com"), Ok(SoaAnswer { records: 1 })).unwrap();
        assert!(outcome.exists());
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(outcome.to_string(), "TLD \"com\" exists");
    }

    #[test]
    fn test_message_echoes_input_spelling() {
        let outcome = classify(&tld("com."), Ok(SoaAnswer { records: 2 })).unwrap();
        assert_eq!(outcome.to_string(), "TLD \"com.\" exists");
    }

    #[test]
    fn test_negative_answers_do_not_exist() {
        for failure in [QueryFailure::NotFound, QueryFailure::NoData] {
            let outcome = classify(&tld("zzzz"), Err(failure)).unwrap();
            assert!(!outcome.exists());
            assert_eq!(outcome.exit_code(), 1);
            assert_eq!(outcome.to_string(), "TLD \"zzzz\" does not exist");
        }
    }

    #[test]
    fn test_other_failures_are_errors() {
        let cases = [
            (QueryFailure::TryAgain, "DNS server failed."),
            (
                QueryFailure::NoRecovery("Refused (5)".into()),
                "FORMERR, NOTIMP, REFUSED, or other error",
            ),
            (QueryFailure::Unknown("4000".into()), "Unknown error: 4000"),
        ];
        for (failure, message) in cases {
            let err = classify(&tld("com"), Err(failure)).unwrap_err();
            assert_eq!(err.exit_code(), EXIT_ERROR);
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn test_classification_is_repeatable() {
        let first = classify(&tld("net"), Err(QueryFailure::NotFound)).unwrap();
        let second = classify(&tld("net"), Err(QueryFailure::NotFound)).unwrap();
        assert_eq!(first, second);
    }
}
