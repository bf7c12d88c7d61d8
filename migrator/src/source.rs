//! Source-host orchestration.
//!
//! A [`SourceHost`] answers the three management queries, downloads every
//! file a driver references, and writes the finished archive. All remote
//! interaction flows through the executor passed to each call.

use crate::endpoint::RemoteEndpoint;
use crate::error::Result;
use crate::exec::CommandExecutor;
use crate::{rpc, smb};
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info};
use spoolmig_common::archive::{ArchiveName, pack_driver};
use spoolmig_common::parse::{parse_driver_detail, parse_driver_names, parse_printers};
use spoolmig_common::record::{DriverRecord, PrinterRecord};
use spoolmig_common::unc::{NormalizedPath, share_relative};
use std::collections::BTreeMap;
use std::fs;

/// A print server drivers are copied from.
#[derive(Debug, Clone)]
pub struct SourceHost {
    endpoint: RemoteEndpoint,
}

impl SourceHost {
    /// Create a source host around a resolved endpoint.
    #[must_use]
    pub fn new(endpoint: RemoteEndpoint) -> Self {
        Self { endpoint }
    }

    /// The host's name, recorded on every parsed record.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.endpoint.host
    }

    /// Enumerate the shared printers.
    ///
    /// # Errors
    ///
    /// Returns remote execution failures and enumeration parse errors.
    pub fn printers(&self, executor: &dyn CommandExecutor) -> Result<Vec<PrinterRecord>> {
        info!("enumerating printers on {}", self.name());
        let output = rpc::run_rpc(executor, &self.endpoint, "enumprinters")?;
        Ok(parse_printers(&output, self.name())?)
    }

    /// Enumerate the installed driver names.
    ///
    /// # Errors
    ///
    /// Returns remote execution failures and enumeration parse errors.
    pub fn drivers(&self, executor: &dyn CommandExecutor) -> Result<Vec<String>> {
        info!("enumerating drivers on {}", self.name());
        let output = rpc::run_rpc(executor, &self.endpoint, "enumdrivers")?;
        Ok(parse_driver_names(&output)?)
    }

    /// Query the driver detail for one printer.
    ///
    /// # Errors
    ///
    /// Returns remote execution failures and detail parse errors.
    pub fn driver_detail(
        &self,
        executor: &dyn CommandExecutor,
        printer_name: &str,
    ) -> Result<DriverRecord> {
        info!("loading driver info for {printer_name:?}");
        let command = format!("getdriver \"{printer_name}\"");
        let output = rpc::run_rpc(executor, &self.endpoint, &command)?;
        Ok(parse_driver_detail(&output, self.name())?)
    }

    /// Download every file a driver references, keyed by normalized path.
    ///
    /// Repeated references are downloaded once. The raw share-relative
    /// path addresses the transfer; the normalized form keys the result
    /// for the packer.
    ///
    /// # Errors
    ///
    /// Returns path errors for malformed references and transfer errors
    /// from the client.
    pub fn download_referenced(
        &self,
        executor: &dyn CommandExecutor,
        record: &DriverRecord,
    ) -> Result<BTreeMap<NormalizedPath, Vec<u8>>> {
        let mut files = BTreeMap::new();
        for reference in record.referenced_files() {
            let relative = share_relative(reference)?;
            let key = NormalizedPath::new(&relative);
            if files.contains_key(&key) {
                debug!("already downloaded {relative:?}");
                continue;
            }
            let bytes = smb::download(executor, &self.endpoint, &relative)?;
            files.insert(key, bytes);
        }
        Ok(files)
    }

    /// Fetch one printer's driver into an archive file under `output_dir`.
    ///
    /// Returns the path of the written archive. The deterministic archive
    /// name means running twice overwrites rather than accumulates.
    ///
    /// # Errors
    ///
    /// Returns any failure from the detail query, the downloads, the
    /// packer, or the final write.
    pub fn fetch_driver(
        &self,
        executor: &dyn CommandExecutor,
        printer: &PrinterRecord,
        output_dir: &Utf8Path,
    ) -> Result<Utf8PathBuf> {
        let record = self.driver_detail(executor, &printer.name)?;
        info!("getting driver files for {:?}", record.name);
        let files = self.download_referenced(executor, &record)?;

        let archive = pack_driver(&record, &files)?;
        let name = ArchiveName::new(record.name.clone(), record.architecture.clone());
        let target = output_dir.join(name.filename());
        fs::write(&target, archive)?;
        info!("wrote {target}");
        Ok(target)
    }
}
