//! Archive unpacking for the destination side.
//!
//! Unpacking recovers the embedded manifest and the flat, ordered list of
//! files that must be staged for upload. Each file is re-addressed to a
//! two-segment `<architecture>/<basename>` transfer key; the destination
//! server's driver store is flat below the architecture directory, so the
//! intermediate directory structure is discarded here.

use super::manifest::{DriverManifest, MANIFEST_ENTRY};
use crate::error::ArchiveError;
use crate::unc::NormalizedPath;
use log::debug;
use std::io::{Cursor, Read, Seek};
use zip::ZipArchive;
use zip::result::ZipError;

/// A file recovered from an archive, addressed for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Normalized path the file was stored at inside the archive.
    pub archive_path: NormalizedPath,
    /// Two-segment `<architecture>/<basename>` upload address.
    pub transfer_key: String,
    /// The file contents.
    pub bytes: Vec<u8>,
}

/// The result of unpacking a driver archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpackedDriver {
    /// The embedded manifest.
    pub manifest: DriverManifest,
    /// Staged files in registration order: driver path, data file, config
    /// file, help file, then dependent files. Duplicate references appear
    /// once per reference.
    pub files: Vec<StagedFile>,
}

/// Compute the `<architecture>/<basename>` transfer key for an archived
/// path. Two files sharing a basename collide only when they also share
/// their architecture segment; that historical limitation is kept.
#[must_use]
pub fn transfer_key(path: &NormalizedPath) -> String {
    format!("{}/{}", path.architecture_segment(), path.basename())
}

/// Unpack driver archive bytes into the manifest and its staged files.
///
/// # Errors
///
/// Returns [`ArchiveError::MissingArchiveEntry`] when the manifest entry or
/// any file it references is absent, a JSON error for a malformed manifest,
/// and container errors for an unreadable zip.
///
/// # Examples
///
/// ```no_run
/// use spoolmig_common::archive::unpack_driver;
///
/// let bytes = std::fs::read("HP_LaserJet_4---Windows_NT_x86.zip")?;
/// let unpacked = unpack_driver(&bytes)?;
/// println!("{} file(s) to stage", unpacked.files.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn unpack_driver(bytes: &[u8]) -> Result<UnpackedDriver, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let manifest_bytes = read_entry(&mut archive, MANIFEST_ENTRY)?;
    let manifest = DriverManifest::from_json(&String::from_utf8_lossy(&manifest_bytes))?;
    debug!(
        "unpacking driver {:?} ({})",
        manifest.driver_name, manifest.architecture
    );

    let paths: Vec<NormalizedPath> = manifest.file_paths().into_iter().cloned().collect();
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let contents = read_entry(&mut archive, path.as_str())?;
        files.push(StagedFile {
            transfer_key: transfer_key(&path),
            archive_path: path,
            bytes: contents,
        });
    }

    Ok(UnpackedDriver { manifest, files })
}

/// Read one entry's bytes, mapping an absent entry to the codec's own
/// error kind.
fn read_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Vec<u8>, ArchiveError> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(ArchiveError::MissingArchiveEntry {
                path: name.to_owned(),
            });
        }
        Err(other) => return Err(other.into()),
    };
    let mut bytes = Vec::with_capacity(usize::try_from(entry.size()).unwrap_or(0));
    entry.read_to_end(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "unpack_tests.rs"]
mod tests;
