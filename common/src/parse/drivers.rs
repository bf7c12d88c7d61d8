//! Driver enumeration parsing.
//!
//! `enumdrivers` output repeats a stanza per architecture group: a
//! `[Windows …]` header, a `Printer Driver Info 1:` opener, then one
//! `Driver Name: [<name>]` line per driver. A driver supported on several
//! architectures appears once per group; only its first occurrence is kept.

use super::{ENVIRONMENT_ADVISORY, is_architecture_header};
use crate::error::ParseError;
use log::debug;

/// Stanza opener for the info level 1 listing.
const STANZA_HEADER: &str = "Printer Driver Info 1:";

/// Prefix of a driver name line.
const NAME_PREFIX: &str = "Driver Name: [";

/// Parse the raw output of a driver enumeration query into the ordered,
/// deduplicated list of driver names the server offers.
///
/// Structural lines (stanza openers, architecture headers) and the
/// no-entries advisory are ignored; duplicate names are dropped with the
/// first occurrence winning. There is no silent-skip fallback for anything
/// else.
///
/// # Errors
///
/// Returns [`ParseError::UnrecognizedLine`] for any non-blank line that is
/// neither ignorable nor a well-formed driver name line.
///
/// # Examples
///
/// ```
/// use spoolmig_common::parse::parse_driver_names;
///
/// let output = "[Windows NT x86]\n\
///               Printer Driver Info 1:\n\
///               \tDriver Name: [HP LaserJet 4]\n";
/// assert_eq!(parse_driver_names(output)?, vec!["HP LaserJet 4"]);
/// # Ok::<(), spoolmig_common::error::ParseError>(())
/// ```
pub fn parse_driver_names(output: &str) -> Result<Vec<String>, ParseError> {
    let mut names: Vec<String> = Vec::new();

    for line in output.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if line.starts_with(ENVIRONMENT_ADVISORY)
            || line == STANZA_HEADER
            || is_architecture_header(line)
        {
            continue;
        }
        if let Some(name) = driver_name(line) {
            if names.iter().any(|existing| existing == name) {
                debug!("dropping repeated driver listing for {name:?}");
            } else {
                names.push(name.to_owned());
            }
            continue;
        }
        return Err(ParseError::UnrecognizedLine {
            line: line.to_owned(),
        });
    }

    Ok(names)
}

/// Extract the name from a `Driver Name: [<name>]` line. Names are
/// restricted to ASCII alphanumerics, spaces, hyphens, and underscores,
/// matching the remote tool's own character set.
fn driver_name(line: &str) -> Option<&str> {
    let name = line.strip_prefix(NAME_PREFIX)?.strip_suffix(']')?;
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'));
    valid.then_some(name)
}
