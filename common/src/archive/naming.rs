//! Archive naming policy for driver bundles.
//!
//! Constructs deterministic archive names of the form
//! `<DriverName>---<Architecture>.zip`, with spaces replaced by
//! underscores, so repeated runs against the same driver overwrite the
//! previous archive instead of accumulating copies.

use std::fmt;

/// Separator between the driver name and architecture components.
const NAME_SEPARATOR: &str = "---";

/// The fixed file extension for driver archives.
const ARCHIVE_EXTENSION: &str = ".zip";

/// A deterministic driver archive name.
///
/// # Examples
///
/// ```
/// use spoolmig_common::archive::ArchiveName;
///
/// let name = ArchiveName::new("HP LaserJet 4", "Windows NT x86");
/// assert_eq!(name.filename(), "HP_LaserJet_4---Windows_NT_x86.zip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    driver_name: String,
    architecture: String,
}

impl ArchiveName {
    /// Create an archive name from a driver name and architecture tag.
    #[must_use]
    pub fn new(driver_name: impl Into<String>, architecture: impl Into<String>) -> Self {
        Self {
            driver_name: driver_name.into(),
            architecture: architecture.into(),
        }
    }

    /// Return the filename as a string without consuming the value.
    #[must_use]
    pub fn filename(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ArchiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = format!(
            "{}{NAME_SEPARATOR}{}{ARCHIVE_EXTENSION}",
            self.driver_name, self.architecture
        );
        write!(f, "{}", raw.replace(' ', "_"))
    }
}
