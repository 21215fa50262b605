//! TLD argument validation.
//!
//! A TLD argument is accepted when it contains no separator, or a single
//! separator as its final character. The accepted label is turned into a
//! fully-qualified DNS name so the resolver never appends search domains.
//! ASCII labels go on the wire byte-for-byte, so `a_b` or `ab*` are queried
//! rather than rejected by hostname syntax rules.

use std::fmt;
use std::str::FromStr;

use hickory_resolver::Name;
use log::debug;

use crate::config::LABEL_SEPARATOR;
use crate::error_handling::TldError;

/// A validated top-level domain.
///
/// Keeps the text the user typed (for messages) next to the name that is
/// actually queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tld {
    input: String,
    name: Name,
}

impl Tld {
    /// Validates `input` as a single-label TLD.
    ///
    /// # Errors
    ///
    /// Returns `TldError::EmbeddedSeparator` if a separator is followed by more
    /// characters, or `TldError::InvalidLabel` if the label is longer than 63 octets
    /// or cannot be IDNA-encoded.
    pub fn parse(input: &str) -> Result<Self, TldError> {
        let label = match input.find(LABEL_SEPARATOR) {
            None => input,
            Some(pos) if pos + LABEL_SEPARATOR.len_utf8() == input.len() => &input[..pos],
            Some(_) => return Err(TldError::EmbeddedSeparator),
        };

        // An empty label is the root zone, same as "."
        let name = if label.is_empty() {
            Ok(Name::root())
        } else if label.is_ascii() {
            // Sent as raw octets; only the 63-octet limit applies
            Name::from_labels([label.as_bytes()])
        } else {
            Name::from_utf8(format!("{label}{LABEL_SEPARATOR}"))
        }
        .map_err(|e| TldError::InvalidLabel {
            label: label.to_string(),
            reason: e.to_string(),
        })?;

        debug!("Accepted TLD {input:?} as query name {name}");
        Ok(Self {
            input: input.to_string(),
            name,
        })
    }

    /// The argument exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.input
    }

    /// The fully-qualified name sent in the SOA question.
    pub fn query_name(&self) -> &Name {
        &self.name
    }
}

impl FromStr for Tld {
    type Err = TldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Tld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.input)
    }
}
