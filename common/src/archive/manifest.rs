//! Manifest schema for driver archives.
//!
//! Every archive embeds one `driverinfo.json` entry mirroring the
//! [`DriverRecord`] it was packed from, except that each path-bearing field
//! holds the normalized relative path of the corresponding archive entry
//! instead of a raw UNC reference. The JSON keys are the exact key names
//! the remote tool reports, so a standalone reader that only knows this
//! schema can consume any archive.

use crate::error::PathError;
use crate::record::DriverRecord;
use crate::unc::NormalizedPath;
use serde::{Deserialize, Serialize};

/// Name of the manifest entry inside every driver archive.
pub const MANIFEST_ENTRY: &str = "driverinfo.json";

/// The embedded metadata entry describing a packed driver.
///
/// ```json
/// {
///     "Version": 3,
///     "Architecture": "Windows NT x86",
///     "Driver Path": "w32x86/3/hppcl5.dll",
///     "Datafile": "w32x86/3/hp4.ppd",
///     "Configfile": "w32x86/3/hpui.dll",
///     "Helpfile": "w32x86/3/hp.hlp",
///     "Driver Name": "HP LaserJet 4",
///     "Monitorname": "PJL Monitor",
///     "Defaultdatatype": "RAW",
///     "Dependentfiles": ["w32x86/3/hpres.dll"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverManifest {
    /// Driver info structure version recorded at pack time.
    #[serde(rename = "Version")]
    pub version: u32,
    /// Architecture tag, verbatim.
    #[serde(rename = "Architecture")]
    pub architecture: String,
    /// Normalized path of the main driver binary.
    #[serde(rename = "Driver Path")]
    pub driver_path: NormalizedPath,
    /// Normalized path of the driver data file.
    #[serde(rename = "Datafile")]
    pub data_file: NormalizedPath,
    /// Normalized path of the configuration library.
    #[serde(rename = "Configfile")]
    pub config_file: NormalizedPath,
    /// Normalized path of the help file.
    #[serde(rename = "Helpfile")]
    pub help_file: NormalizedPath,
    /// Driver display name, verbatim.
    #[serde(rename = "Driver Name")]
    pub driver_name: String,
    /// Language monitor name, verbatim.
    #[serde(rename = "Monitorname")]
    pub monitor_name: String,
    /// Default spool data type, verbatim.
    #[serde(rename = "Defaultdatatype")]
    pub default_data_type: String,
    /// Normalized paths of the dependent files, order preserved.
    #[serde(rename = "Dependentfiles", default)]
    pub dependent_files: Vec<NormalizedPath>,
}

impl DriverManifest {
    /// Build a manifest from a parsed record, normalizing every
    /// path-bearing field.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] when any referenced file is not a
    /// well-formed driver-store UNC reference.
    pub fn from_record(record: &DriverRecord) -> Result<Self, PathError> {
        Ok(Self {
            version: record.version,
            architecture: record.architecture.clone(),
            driver_path: NormalizedPath::from_unc(&record.driver_path)?,
            data_file: NormalizedPath::from_unc(&record.data_file)?,
            config_file: NormalizedPath::from_unc(&record.config_file)?,
            help_file: NormalizedPath::from_unc(&record.help_file)?,
            driver_name: record.name.clone(),
            monitor_name: record.monitor_name.clone(),
            default_data_type: record.default_data_type.clone(),
            dependent_files: record
                .dependent_files
                .iter()
                .map(|reference| NormalizedPath::from_unc(reference))
                .collect::<Result<_, _>>()?,
        })
    }

    /// All archived file paths in registration order: driver path, data
    /// file, config file, help file, then dependent files. Duplicates are
    /// preserved; the destination command depends on this order
    /// positionally.
    #[must_use]
    pub fn file_paths(&self) -> Vec<&NormalizedPath> {
        let mut paths = vec![
            &self.driver_path,
            &self.data_file,
            &self.config_file,
            &self.help_file,
        ];
        paths.extend(self.dependent_files.iter());
        paths
    }

    /// Serialize to the pretty-printed JSON stored in the archive.
    ///
    /// # Errors
    ///
    /// Returns the underlying serializer error; with this schema that only
    /// happens when the writer itself fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a manifest from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error for malformed JSON or a missing
    /// required key.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
