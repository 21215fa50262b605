//! tld_check library: checks whether a top-level domain exists
//!
//! A TLD is considered to exist when the configured DNS resolver returns data
//! for an SOA query on it. A check runs in four steps: validate the argument,
//! initialize the resolver, issue one SOA query, classify the result.
//!
//! # Example
//!
//! ```no_run
//! use tld_check::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let outcome = run_check(&Config::for_tld("com")).await?;
//! println!("{outcome}");
//! std::process::exit(outcome.exit_code());
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod tld;

// Re-export public API
pub use app::{classify, program_name, usage_text, Outcome};
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{query_soa, SoaAnswer};
pub use error_handling::{CheckError, InitializationError, QueryFailure, TldError};
pub use run::{check_tld, run_check};
pub use tld::Tld;

// Internal run module (the validate -> init -> query -> classify pipeline)
mod run {
    use hickory_resolver::TokioAsyncResolver;
    use log::debug;

    use crate::app::{classify, Outcome};
    use crate::config::Config;
    use crate::dns::query_soa;
    use crate::error_handling::CheckError;
    use crate::initialization::init_resolver;
    use crate::tld::Tld;

    /// Runs a complete check with the provided configuration.
    ///
    /// The argument is validated before the resolver is touched, so a malformed
    /// TLD never causes a query. No step is retried.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The TLD contains an embedded separator or is not a valid DNS label
    /// - No usable resolver configuration is available
    /// - The query fails for a reason other than NXDOMAIN/NODATA
    pub async fn run_check(config: &Config) -> Result<Outcome, CheckError> {
        let tld = Tld::parse(&config.tld)?;
        let resolver =
            init_resolver(config.resolv_conf.as_deref()).map_err(CheckError::ResolverInit)?;
        check_tld(&tld, &resolver).await
    }

    /// Queries and classifies an already-validated TLD with an existing resolver.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Query` for transient, non-recoverable, and unknown failures.
    pub async fn check_tld(
        tld: &Tld,
        resolver: &TokioAsyncResolver,
    ) -> Result<Outcome, CheckError> {
        let result = query_soa(tld, resolver).await;
        let outcome = classify(tld, result);
        debug!("Check of {tld:?} finished: {outcome:?}");
        outcome
    }
}
