//! Usage text printed when the argument count is wrong.

use std::ffi::OsStr;
use std::path::Path;

use crate::config::DEFAULT_PROGRAM_NAME;

/// Base name of the running executable, taken from `argv[0]`.
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

/// Usage text for `program`, including the exit status table.
pub fn usage_text(program: &str) -> String {
    format!(
        "\nUsage: {program} <tld>\n\
         \nWhere\n\
         \t<tld> is the top-level-domain to check\n\
         \nReturns\n\
         \t 0 if <tld> exists\n\
         \t 1 if <tld> does not exist\n\
         \t-1 if an error occured\n\
         \nRequires a configured DNS resolver\n\n"
    )
}
