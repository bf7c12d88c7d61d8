//! File transfer over `smbclient`.
//!
//! Downloads address the driver store by the raw share-relative path the
//! server reported (original case, backslash separators); uploads ship a
//! locally built tarball that `smbclient` extracts into the share. Both
//! directions stage through temporary files that are removed on every exit
//! path.

use crate::endpoint::RemoteEndpoint;
use crate::error::{MigratorError, Result};
use crate::exec::CommandExecutor;
use log::debug;
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;

/// The file transfer client program.
pub const SMB_PROGRAM: &str = "smbclient";

/// Download one file from the endpoint's driver store.
///
/// `remote_path` is the share-relative reference exactly as extracted from
/// the server's UNC path, not the normalized archive form.
///
/// # Errors
///
/// Returns [`MigratorError::Transfer`] when the client exits unsuccessfully
/// and [`MigratorError::Io`] when the staged file cannot be created or read
/// back.
pub fn download(
    executor: &dyn CommandExecutor,
    endpoint: &RemoteEndpoint,
    remote_path: &str,
) -> Result<Vec<u8>> {
    let staging = NamedTempFile::new()?;
    let local_path = staging.path().to_string_lossy().into_owned();

    debug!("downloading {remote_path:?} from //{}", endpoint.host);
    let command = format!("get \"{remote_path}\" \"{local_path}\"");
    let output = executor.run(SMB_PROGRAM, &endpoint.smb_args(&command))?;
    if !output.status.success() {
        return Err(MigratorError::Transfer {
            path: remote_path.to_owned(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    Ok(fs::read(staging.path())?)
}

/// Upload a staged tarball into the endpoint's driver store.
///
/// The client's `tar x` command extracts the local tarball on the remote
/// share, creating each entry at its `<architecture>/<basename>` path.
///
/// # Errors
///
/// Returns [`MigratorError::Transfer`] when the client exits unsuccessfully.
pub fn upload(
    executor: &dyn CommandExecutor,
    endpoint: &RemoteEndpoint,
    tar_path: &Path,
) -> Result<()> {
    let local_path = tar_path.to_string_lossy();

    debug!("uploading {local_path} to //{}", endpoint.host);
    let command = format!("tar x {local_path}");
    let output = executor.run(SMB_PROGRAM, &endpoint.smb_args(&command))?;
    if !output.status.success() {
        return Err(MigratorError::Transfer {
            path: local_path.into_owned(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    Ok(())
}
