//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and configuration.
///
/// Exactly one positional argument (the TLD) is accepted. Flags are optional and
/// never counted as positional arguments.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// tld_check com
///
/// # Trailing separator is accepted
/// tld_check org.
///
/// # Verbose logging against a specific resolver configuration
/// tld_check --log-level debug --resolv-conf ./resolv.conf net
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tld_check",
    version,
    about = "Checks whether a top-level domain exists by querying its SOA record."
)]
pub struct Config {
    /// Top-level domain to check (an optional trailing '.' is allowed)
    #[arg(value_parser, allow_hyphen_values = true)]
    pub tld: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Read resolver configuration from this file instead of the system default
    #[arg(long, value_parser)]
    pub resolv_conf: Option<PathBuf>,
}

impl Config {
    /// Builds a configuration for `tld` with default logging and the system resolver.
    pub fn for_tld(tld: impl Into<String>) -> Self {
        Self {
            tld: tld.into(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            resolv_conf: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_parse_single_positional() {
        let config = Config::try_parse_from(["tld_check", "com"]).expect("should parse");
        assert_eq!(config.tld, "com");
        assert!(config.resolv_conf.is_none());
        assert_eq!(
            log::LevelFilter::from(config.log_level),
            log::LevelFilter::Warn
        );
    }

    #[test]
    fn test_parse_rejects_missing_and_extra_positionals() {
        assert!(Config::try_parse_from(["tld_check"]).is_err());
        assert!(Config::try_parse_from(["tld_check", "com", "net"]).is_err());
    }

    #[test]
    fn test_for_tld_matches_cli_defaults() {
        let built = Config::for_tld("org.");
        let parsed = Config::try_parse_from(["tld_check", "org."]).expect("should parse");
        assert_eq!(built.tld, parsed.tld);
        assert_eq!(built.resolv_conf, parsed.resolv_conf);
        assert!(matches!(built.log_format, LogFormat::Plain));
        assert!(matches!(parsed.log_format, LogFormat::Plain));
    }
}
