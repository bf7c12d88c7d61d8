//! Destination-host orchestration.
//!
//! Deploying an archive is a fixed sequence: unpack, stage the re-keyed
//! tarball, upload it into the driver store, then register the driver with
//! a freshly versioned `adddriver` command. Archive discovery is explicit;
//! callers pass the paths or the directory to scan.

use crate::endpoint::RemoteEndpoint;
use crate::error::{MigratorError, Result};
use crate::exec::CommandExecutor;
use crate::{rpc, smb, staging};
use camino::{Utf8Path, Utf8PathBuf};
use log::info;
use spoolmig_common::archive::unpack_driver;
use spoolmig_common::register::registration_command;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

/// A print server drivers are deployed to.
#[derive(Debug, Clone)]
pub struct DestinationHost {
    endpoint: RemoteEndpoint,
}

impl DestinationHost {
    /// Create a destination host around a resolved endpoint.
    #[must_use]
    pub fn new(endpoint: RemoteEndpoint) -> Self {
        Self { endpoint }
    }

    /// The host's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.endpoint.host
    }

    /// Deploy one archive: upload its files and register the driver.
    ///
    /// `version` becomes the registration command's version field; see
    /// [`registration_version`]. Returns the registration command's
    /// output for the operator.
    ///
    /// # Errors
    ///
    /// Returns any failure from reading or unpacking the archive, staging,
    /// the upload, or the registration command.
    pub fn deploy(
        &self,
        executor: &dyn CommandExecutor,
        archive_path: &Utf8Path,
        version: u64,
    ) -> Result<String> {
        info!("loading {archive_path}");
        let bytes = fs::read(archive_path)?;
        let unpacked = unpack_driver(&bytes)?;
        info!(
            "driver present {:?} ({})",
            unpacked.manifest.driver_name, unpacked.manifest.architecture
        );

        let staged = staging::stage_for_upload(&unpacked)?;
        smb::upload(executor, &self.endpoint, staged.path())?;

        let command = registration_command(&unpacked.manifest, version);
        let response = rpc::run_rpc(executor, &self.endpoint, &command)?;
        info!("registered {:?} on {}", unpacked.manifest.driver_name, self.name());
        Ok(response)
    }
}

/// The version value for a registration happening now: the current Unix
/// timestamp. The destination accepts only versions strictly greater than
/// any it has seen, which a wall clock satisfies across runs.
#[must_use]
pub fn registration_version() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

/// Find every driver archive in a directory, sorted by name.
///
/// # Errors
///
/// Returns [`MigratorError::NoArchives`] when the directory holds no
/// `.zip` files, and [`MigratorError::Io`] when it cannot be read.
pub fn discover_archives(directory: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut archives = Vec::new();
    for entry in directory.read_dir_utf8()? {
        let path = entry?.into_path();
        if path.extension() == Some("zip") {
            archives.push(path);
        }
    }
    archives.sort();

    if archives.is_empty() {
        return Err(MigratorError::NoArchives {
            directory: directory.to_owned(),
        });
    }
    Ok(archives)
}
