//! Spoolmig core library.
//!
//! This crate provides the pure, I/O-free core of the spoolmig printer-driver
//! migration toolkit: the line-oriented parsers for `rpcclient` enumeration
//! output, the UNC path normalization rules, the driver-archive codec, and
//! the registration command synthesizer. It is consumed by the `spoolmig`
//! orchestration crate and can be used standalone to inspect or repack
//! driver archives.
//!
//! # Modules
//!
//! - [`archive`] - Driver archive packing, unpacking, naming, and manifest
//! - [`error`] - Fatal error types for parsing, paths, and archives
//! - [`parse`] - Parsers for printer, driver, and driver-detail output
//! - [`record`] - The `DriverRecord`/`PrinterRecord` data model
//! - [`register`] - Registration command synthesis
//! - [`unc`] - UNC reference splitting and path normalization

pub mod archive;
pub mod error;
pub mod parse;
pub mod record;
pub mod register;
pub mod unc;
