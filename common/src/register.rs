//! Registration command synthesis.
//!
//! The destination server installs an uploaded driver through a fixed
//! positional `adddriver` command. The command addresses files by basename
//! only: by the time it runs, every file already sits in the architecture
//! directory of the destination's driver store.

use crate::archive::DriverManifest;
use log::debug;

/// Build the registration command for an unpacked driver.
///
/// The version argument becomes the command's trailing version field; the
/// destination requires a version strictly greater than any it has seen,
/// so callers pass the current Unix timestamp rather than the version
/// recorded at packing time. Taking it as a parameter keeps the function
/// deterministic.
///
/// Forward slashes are converted to backslashes after assembly; basenames
/// contain none, so the conversion only matters if a name field carries
/// one.
///
/// # Examples
///
/// ```
/// use spoolmig_common::archive::DriverManifest;
/// use spoolmig_common::register::registration_command;
///
/// let json = r#"{
///     "Version": 3,
///     "Architecture": "Windows NT x86",
///     "Driver Path": "w32x86/3/hppcl5.dll",
///     "Datafile": "w32x86/3/hp4.ppd",
///     "Configfile": "w32x86/3/hpui.dll",
///     "Helpfile": "w32x86/3/hp.hlp",
///     "Driver Name": "HP LaserJet 4",
///     "Monitorname": "",
///     "Defaultdatatype": "RAW",
///     "Dependentfiles": ["w32x86/3/hpres.dll"]
/// }"#;
/// let manifest = DriverManifest::from_json(json).expect("valid manifest");
/// assert_eq!(
///     registration_command(&manifest, 1700000000),
///     "adddriver \"Windows NT x86\" \"HP LaserJet 4\":hppcl5.dll:hp4.ppd:hpui.dll:hp.hlp::RAW:hpres.dll 1700000000",
/// );
/// ```
#[must_use]
pub fn registration_command(manifest: &DriverManifest, version: u64) -> String {
    let dependents = manifest
        .dependent_files
        .iter()
        .map(|path| path.basename())
        .collect::<Vec<_>>()
        .join(",");

    let command = format!(
        "adddriver \"{}\" \"{}\":{}:{}:{}:{}:{}:{}:{} {}",
        manifest.architecture,
        manifest.driver_name,
        manifest.driver_path.basename(),
        manifest.data_file.basename(),
        manifest.config_file.basename(),
        manifest.help_file.basename(),
        manifest.monitor_name,
        manifest.default_data_type,
        dependents,
        version,
    );
    debug!("synthesized registration command for {:?}", manifest.driver_name);
    command.replace('/', "\\")
}
