//! Configuration constants.
//!
//! This module defines the exit statuses and the fixed user-facing messages
//! printed by the checker.

/// Exit status when the TLD exists.
pub const EXIT_EXISTS: i32 = 0;
/// Exit status when the TLD does not exist (NXDOMAIN or NODATA).
pub const EXIT_DOES_NOT_EXIST: i32 = 1;
/// Exit status for usage errors, bad input, and resolver failures.
///
/// `std::process::exit(-1)` is reported as 255 by Unix shells.
pub const EXIT_ERROR: i32 = -1;

/// Label separator. A TLD may only carry it as its last character.
pub const LABEL_SEPARATOR: char = '.';

// Diagnostics written to stderr
/// The argument has a separator followed by more characters.
pub const MSG_EMBEDDED_SEPARATOR: &str = "TLDs must not contain '.'";
/// No usable resolver configuration.
pub const MSG_RESOLVER_INIT: &str = "Unable to initialize DNS resolver";
/// SERVFAIL, timeout, or unreachable nameservers.
pub const MSG_SERVER_FAILED: &str = "DNS server failed.";
/// FORMERR, REFUSED, NOTIMP and other non-recoverable answers.
pub const MSG_NO_RECOVERY: &str = "FORMERR, NOTIMP, REFUSED, or other error";

/// Program name used in the usage text when `argv[0]` is unavailable.
pub const DEFAULT_PROGRAM_NAME: &str = "tld_check";
