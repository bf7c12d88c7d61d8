//! Parsers for the remote management tool's free-text output.
//!
//! Three line-oriented grammars, one per query: printer enumeration
//! (`enumprinters`), driver enumeration (`enumdrivers`), and per-driver
//! detail (`getdriver`). All three are total: a line that matches neither a
//! data pattern nor a known ignorable pattern aborts the whole parse.

pub mod detail;
pub mod drivers;
pub mod printers;

pub use detail::{DriverDetailAccumulator, parse_driver_detail};
pub use drivers::parse_driver_names;
pub use printers::{PrinterAccumulator, parse_printers};

/// Advisory the server emits for an architecture group with no entries.
/// Ignored wherever it occurs.
pub(crate) const ENVIRONMENT_ADVISORY: &str = "Server does not support environment";

/// Architecture group headers look like `[Windows NT x86]` on a line of
/// their own. They carry no data either parser needs.
pub(crate) fn is_architecture_header(line: &str) -> bool {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(|inner| inner.starts_with("Windows"))
}
