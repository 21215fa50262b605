//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.
//! Log records always go to stderr so stdout only ever carries the check result.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (level coloured) and JSON lines for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it for this crate.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if logger initialization fails.
///
/// # Examples
///
/// ```bash
/// # Show the query name and the raw resolver error
/// tld_check --log-level debug com
///
/// # Same, as JSON lines
/// tld_check --log-level debug --log-format json com
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // hickory reports malformed or truncated UDP replies as warnings and then recovers
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Warn);
    builder.filter_module("tld_check", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_line(record, chrono::Utc::now().timestamp_millis())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| writeln!(buf, "{}", plain_line(record)));
        }
    }

    // try_init() so a second initialization (tests) returns an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// One plain log line: `<target> [<LEVEL>] <message>`, level coloured.
fn plain_line(record: &log::Record) -> String {
    let level = record.level().to_string();
    let level = match record.level() {
        log::Level::Error => level.red(),
        log::Level::Warn => level.yellow(),
        log::Level::Info => level.green(),
        log::Level::Debug | log::Level::Trace => level.dimmed(),
    };
    format!("{} [{}] {}", record.target(), level, record.args())
}

fn json_line(record: &log::Record, ts_millis: i64) -> String {
    let msg = serde_json::to_string(&record.args().to_string())
        .unwrap_or_else(|_| "\"\"".into());
    format!(
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        ts_millis,
        record.level(),
        record.target(),
        msg
    )
}
