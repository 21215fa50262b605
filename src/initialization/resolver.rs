//! DNS resolver initialization.
//!
//! This module builds the resolver from the system configuration, or from an
//! explicit `resolv.conf` file, and refuses configurations without nameservers.

use std::path::Path;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::debug;

use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used for the SOA query.
///
/// Reads the system configuration (nameservers, search list, timeouts, attempts)
/// unless `resolv_conf` names a file to read instead. Timeouts and retry counts
/// are taken from the configuration as-is.
///
/// # Arguments
///
/// * `resolv_conf` - Optional path to a `resolv.conf`-format file
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the configuration cannot be
/// read or parsed, or lists no nameservers.
pub fn init_resolver(resolv_conf: Option<&Path>) -> Result<TokioAsyncResolver, InitializationError> {
    let (config, opts) = match resolv_conf {
        Some(path) => {
            debug!("Reading resolver configuration from {}", path.display());
            read_resolv_conf_file(path)?
        }
        None => {
            debug!("Reading system resolver configuration");
            hickory_resolver::system_conf::read_system_conf().map_err(|e| {
                InitializationError::DnsResolverError(format!(
                    "failed to read system configuration: {e}"
                ))
            })?
        }
    };

    init_resolver_with(config, opts)
}

/// Initializes the resolver from an already-built configuration.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if `config` has no nameservers.
pub fn init_resolver_with(
    config: ResolverConfig,
    opts: ResolverOpts,
) -> Result<TokioAsyncResolver, InitializationError> {
    if config.name_servers().is_empty() {
        return Err(InitializationError::DnsResolverError(
            "no nameservers configured".to_string(),
        ));
    }

    debug!(
        "Resolver uses {} nameserver connection(s), timeout {:?}, {} attempt(s)",
        config.name_servers().len(),
        opts.timeout,
        opts.attempts
    );

    Ok(TokioAsyncResolver::tokio(config, opts))
}

#[cfg(unix)]
fn read_resolv_conf_file(
    path: &Path,
) -> Result<(ResolverConfig, ResolverOpts), InitializationError> {
    let data = std::fs::read(path).map_err(|e| {
        InitializationError::DnsResolverError(format!("failed to read {}: {e}", path.display()))
    })?;
    hickory_resolver::system_conf::parse_resolv_conf(data).map_err(|e| {
        InitializationError::DnsResolverError(format!("failed to parse {}: {e}", path.display()))
    })
}

#[cfg(not(unix))]
fn read_resolv_conf_file(
    path: &Path,
) -> Result<(ResolverConfig, ResolverOpts), InitializationError> {
    Err(InitializationError::DnsResolverError(format!(
        "cannot read {}: resolv.conf files are only supported on Unix",
        path.display()
    )))
}
