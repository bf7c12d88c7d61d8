//! Building the re-keyed upload tarball.
//!
//! `smbclient` extracts a local tar archive into the remote share, so the
//! unpacked files are laid out in a tarball under their
//! `<architecture>/<basename>` transfer keys. The tarball lives in a
//! [`NamedTempFile`]; dropping the handle removes it, whether the upload
//! succeeded or the flow bailed early.

use crate::error::Result;
use log::debug;
use spoolmig_common::archive::UnpackedDriver;
use tempfile::NamedTempFile;

/// Write the staged files of an unpacked driver into a fresh tarball.
///
/// Entries appear in registration order under their transfer keys;
/// repeated references produce repeated entries, as the historical tool
/// did.
///
/// # Errors
///
/// Returns [`crate::error::MigratorError::Io`] when the temporary file
/// cannot be created or written.
pub fn stage_for_upload(unpacked: &UnpackedDriver) -> Result<NamedTempFile> {
    let staging = NamedTempFile::new()?;
    let mut builder = tar::Builder::new(staging.as_file());

    for file in &unpacked.files {
        let mut header = tar::Header::new_gnu();
        header.set_size(file.bytes.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, &file.transfer_key, file.bytes.as_slice())?;
    }
    builder.finish()?;
    drop(builder);

    debug!(
        "staged {} file(s) for {:?}",
        unpacked.files.len(),
        unpacked.manifest.driver_name
    );
    Ok(staging)
}
