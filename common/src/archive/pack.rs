//! Archive packing for the source side.
//!
//! Packing is a pure function of a parsed [`DriverRecord`] and the bytes of
//! every file it references, supplied by the download collaborator keyed by
//! normalized relative path. The archive never contains a raw UNC path:
//! every entry is stored at its normalized form, and the embedded manifest
//! records the same strings.

use super::manifest::{DriverManifest, MANIFEST_ENTRY};
use crate::error::ArchiveError;
use crate::record::DriverRecord;
use crate::unc::NormalizedPath;
use log::debug;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Pack a driver and its file contents into archive bytes.
///
/// Files are stored in registration order, with repeated references
/// collapsed into a single entry; the manifest goes in last. No I/O is
/// performed.
///
/// # Errors
///
/// Returns [`ArchiveError::MissingArchiveEntry`] when `files` lacks a
/// referenced path, a [`crate::error::PathError`] (wrapped) when a record
/// field is not a driver-store reference, and container errors if the zip
/// writer fails.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use spoolmig_common::archive::pack_driver;
/// use spoolmig_common::record::DriverRecord;
/// use spoolmig_common::unc::NormalizedPath;
///
/// let record = DriverRecord {
///     name: "Generic".to_owned(),
///     architecture: "Windows NT x86".to_owned(),
///     version: 3,
///     driver_path: r"\\srv\print$\W32X86\3\d.dll".to_owned(),
///     data_file: r"\\srv\print$\W32X86\3\d.ppd".to_owned(),
///     config_file: r"\\srv\print$\W32X86\3\c.dll".to_owned(),
///     help_file: r"\\srv\print$\W32X86\3\h.hlp".to_owned(),
///     monitor_name: "mon".to_owned(),
///     default_data_type: "RAW".to_owned(),
///     dependent_files: vec![],
///     source_host: "srv".to_owned(),
/// };
/// let files: BTreeMap<_, _> = record
///     .referenced_files()
///     .iter()
///     .map(|r| (NormalizedPath::from_unc(r).expect("valid reference"), b"x".to_vec()))
///     .collect();
/// let bytes = pack_driver(&record, &files)?;
/// assert!(!bytes.is_empty());
/// # Ok::<(), spoolmig_common::error::ArchiveError>(())
/// ```
pub fn pack_driver(
    record: &DriverRecord,
    files: &BTreeMap<NormalizedPath, Vec<u8>>,
) -> Result<Vec<u8>, ArchiveError> {
    let manifest = DriverManifest::from_record(record)?;
    let options = SimpleFileOptions::default();
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    let mut stored: Vec<&NormalizedPath> = Vec::new();
    for path in manifest.file_paths() {
        if stored.contains(&path) {
            continue;
        }
        let bytes = files
            .get(path)
            .ok_or_else(|| ArchiveError::MissingArchiveEntry {
                path: path.as_str().to_owned(),
            })?;
        writer.start_file(path.as_str(), options)?;
        writer.write_all(bytes)?;
        stored.push(path);
    }
    debug!(
        "packed {} file(s) for driver {:?}",
        stored.len(),
        record.name
    );

    writer.start_file(MANIFEST_ENTRY, options)?;
    writer.write_all(manifest.to_json()?.as_bytes())?;

    Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
#[path = "pack_tests.rs"]
mod tests;
