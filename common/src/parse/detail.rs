//! Driver detail parsing.
//!
//! `getdriver` output describes one driver as `key: [value]` lines inside a
//! `Printer Driver Info 3:` stanza. The field set is closed: every scalar
//! key must appear exactly once, `Dependentfiles` is the only key allowed
//! to repeat, and an unknown key is fatal rather than silently accepted.

use super::{ENVIRONMENT_ADVISORY, is_architecture_header};
use crate::error::ParseError;
use crate::record::DriverRecord;
use log::debug;

/// Stanza opener for the info level 3 listing.
const STANZA_HEADER: &str = "Printer Driver Info 3:";

/// Parse the raw output of a single driver's detail query.
///
/// # Errors
///
/// Returns [`ParseError::DuplicateKey`] when a scalar key repeats,
/// [`ParseError::UnknownField`] for a key outside the known set,
/// [`ParseError::MalformedLine`] for a non-numeric `Version`,
/// [`ParseError::UnrecognizedLine`] for a line matching no known shape,
/// and [`ParseError::MissingField`] when the output ends with a scalar
/// field unset.
///
/// # Examples
///
/// ```
/// use spoolmig_common::parse::parse_driver_detail;
///
/// let output = "\
/// [Windows NT x86]
/// Printer Driver Info 3:
/// \tVersion: [3]
/// \tDriver Name: [HP LaserJet 4]
/// \tArchitecture: [Windows NT x86]
/// \tDriver Path: [\\\\srv\\print$\\W32X86\\3\\HPPCL5.DLL]
/// \tDatafile: [\\\\srv\\print$\\W32X86\\3\\HP4.PPD]
/// \tConfigfile: [\\\\srv\\print$\\W32X86\\3\\HPUI.DLL]
/// \tHelpfile: [\\\\srv\\print$\\W32X86\\3\\HP.HLP]
/// \tDependentfiles: [\\\\srv\\print$\\W32X86\\3\\HPRES.DLL]
/// \tMonitorname: [PJL Monitor]
/// \tDefaultdatatype: [RAW]
/// ";
/// let record = parse_driver_detail(output, "srv")?;
/// assert_eq!(record.name, "HP LaserJet 4");
/// assert_eq!(record.version, 3);
/// assert_eq!(record.dependent_files.len(), 1);
/// # Ok::<(), spoolmig_common::error::ParseError>(())
/// ```
pub fn parse_driver_detail(output: &str, source_host: &str) -> Result<DriverRecord, ParseError> {
    let mut accumulator = DriverDetailAccumulator::default();

    for line in output.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if line == STANZA_HEADER
            || is_architecture_header(line)
            || line.starts_with(ENVIRONMENT_ADVISORY)
        {
            continue;
        }
        if let Some((key, value)) = data_line(line) {
            accumulator.observe(key, value)?;
            continue;
        }
        return Err(ParseError::UnrecognizedLine {
            line: line.to_owned(),
        });
    }

    accumulator.finalize(source_host)
}

/// Split a `key: [value]` detail line. Unlike the enumeration grammar, the
/// value must be non-empty here.
fn data_line(line: &str) -> Option<(&str, &str)> {
    let (key, rest) = line.split_once(": [")?;
    let value = rest.strip_suffix(']')?;
    (!key.is_empty() && !value.is_empty()).then_some((key, value))
}

/// Field-by-field accumulator for one driver detail stanza.
///
/// Scalar fields are exactly-once; `Dependentfiles` appends in input order.
#[derive(Debug, Default)]
pub struct DriverDetailAccumulator {
    version: Option<u32>,
    architecture: Option<String>,
    driver_path: Option<String>,
    data_file: Option<String>,
    config_file: Option<String>,
    help_file: Option<String>,
    name: Option<String>,
    monitor_name: Option<String>,
    default_data_type: Option<String>,
    dependent_files: Vec<String>,
}

impl DriverDetailAccumulator {
    /// Record one key/value pair.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::DuplicateKey`] for a repeated scalar key,
    /// [`ParseError::UnknownField`] for a key outside the known set, and
    /// [`ParseError::MalformedLine`] for a non-numeric `Version` value.
    pub fn observe(&mut self, key: &str, value: &str) -> Result<(), ParseError> {
        match key {
            "Version" => {
                let version = value.parse().map_err(|_| ParseError::MalformedLine {
                    line: format!("{key}: [{value}]"),
                })?;
                set_scalar(&mut self.version, key, version)
            }
            "Architecture" => set_scalar(&mut self.architecture, key, value.to_owned()),
            "Driver Path" => set_scalar(&mut self.driver_path, key, value.to_owned()),
            "Datafile" => set_scalar(&mut self.data_file, key, value.to_owned()),
            "Configfile" => set_scalar(&mut self.config_file, key, value.to_owned()),
            "Helpfile" => set_scalar(&mut self.help_file, key, value.to_owned()),
            "Driver Name" => set_scalar(&mut self.name, key, value.to_owned()),
            "Monitorname" => set_scalar(&mut self.monitor_name, key, value.to_owned()),
            "Defaultdatatype" => set_scalar(&mut self.default_data_type, key, value.to_owned()),
            "Dependentfiles" => {
                self.dependent_files.push(value.to_owned());
                Ok(())
            }
            _ => Err(ParseError::UnknownField {
                key: key.to_owned(),
            }),
        }
    }

    /// Build the finished record, checking every scalar field was seen.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingField`] naming the first absent field.
    pub fn finalize(self, source_host: &str) -> Result<DriverRecord, ParseError> {
        debug!(
            "finalizing driver detail with {} dependent file(s)",
            self.dependent_files.len()
        );
        Ok(DriverRecord {
            name: required(self.name, "Driver Name")?,
            architecture: required(self.architecture, "Architecture")?,
            version: required(self.version, "Version")?,
            driver_path: required(self.driver_path, "Driver Path")?,
            data_file: required(self.data_file, "Datafile")?,
            config_file: required(self.config_file, "Configfile")?,
            help_file: required(self.help_file, "Helpfile")?,
            monitor_name: required(self.monitor_name, "Monitorname")?,
            default_data_type: required(self.default_data_type, "Defaultdatatype")?,
            dependent_files: self.dependent_files,
            source_host: source_host.to_owned(),
        })
    }
}

/// Set an exactly-once field, rejecting a second occurrence.
fn set_scalar<T>(slot: &mut Option<T>, key: &str, value: T) -> Result<(), ParseError> {
    if slot.is_some() {
        return Err(ParseError::DuplicateKey {
            key: key.to_owned(),
        });
    }
    *slot = Some(value);
    Ok(())
}

/// Unwrap a finalized field or name what was missing.
fn required<T>(slot: Option<T>, field: &'static str) -> Result<T, ParseError> {
    slot.ok_or(ParseError::MissingField { field })
}

#[cfg(test)]
#[path = "detail_tests.rs"]
mod tests;
