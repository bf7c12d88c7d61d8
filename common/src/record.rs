//! The typed records produced by parsing and consumed by the codec.
//!
//! Records are transient: they live only long enough to drive a download on
//! the source side or an upload and registration on the destination side.
//! Path fields hold the raw UNC references exactly as the remote tool
//! printed them; normalization happens when a record enters an archive.

/// A fully populated printer driver, as reported by a driver detail query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRecord {
    /// Driver display name.
    pub name: String,
    /// Architecture tag, e.g. `Windows NT x86`.
    pub architecture: String,
    /// Driver info structure version reported by the server.
    pub version: u32,
    /// UNC reference to the main driver binary.
    pub driver_path: String,
    /// UNC reference to the driver data file.
    pub data_file: String,
    /// UNC reference to the configuration library.
    pub config_file: String,
    /// UNC reference to the help file.
    pub help_file: String,
    /// Language monitor name; often empty.
    pub monitor_name: String,
    /// Default spool data type, e.g. `RAW`.
    pub default_data_type: String,
    /// UNC references to auxiliary files, in enumeration order. May be
    /// empty and may contain duplicates.
    pub dependent_files: Vec<String>,
    /// Name of the host the record was read from.
    pub source_host: String,
}

impl DriverRecord {
    /// All referenced files in registration order: driver path, data file,
    /// config file, help file, then dependent files.
    ///
    /// The order is load-bearing; the destination registration command
    /// depends on it positionally.
    #[must_use]
    pub fn referenced_files(&self) -> Vec<&str> {
        let mut files = vec![
            self.driver_path.as_str(),
            self.data_file.as_str(),
            self.config_file.as_str(),
            self.help_file.as_str(),
        ];
        files.extend(self.dependent_files.iter().map(String::as_str));
        files
    }
}

/// A shared printer, as reported by a printer enumeration query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterRecord {
    /// Original remote printer path, e.g. `\\printsrv\Accounts Laser`.
    pub path: String,
    /// Printer name: the last backslash segment of `path`.
    pub name: String,
    /// Driver name: the second comma-separated token of the printer's
    /// description field.
    pub driver_name: String,
    /// Free-text printer comment; may be empty.
    pub comment: String,
    /// Name of the host the record was read from.
    pub source_host: String,
}
