//! Driver archive codec.
//!
//! A driver archive is a zip container holding every file a driver
//! references, stored at its normalized relative path, plus one
//! `driverinfo.json` manifest entry describing the driver. Packing and
//! unpacking are pure transformations over byte buffers; all network and
//! filesystem I/O belongs to the orchestration layer.

pub mod manifest;
pub mod naming;
pub mod pack;
pub mod unpack;

pub use manifest::{DriverManifest, MANIFEST_ENTRY};
pub use naming::ArchiveName;
pub use pack::pack_driver;
pub use unpack::{StagedFile, UnpackedDriver, transfer_key, unpack_driver};
