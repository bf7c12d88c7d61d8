//! Error types for the spoolmig orchestration layer.
//!
//! Core failures from `spoolmig-common` convert transparently; the variants
//! defined here cover the edges the core deliberately excludes: process
//! execution, file transfer, configuration, and archive selection.

use camino::Utf8PathBuf;
use spoolmig_common::error::{ArchiveError, ParseError, PathError};
use thiserror::Error;

/// Errors that can occur during a migration run.
#[derive(Debug, Error)]
pub enum MigratorError {
    /// Remote enumeration or detail output violated its grammar.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A remote file reference was not a driver-store UNC path.
    #[error("path error: {0}")]
    Path(#[from] PathError),

    /// The archive codec rejected an archive or record.
    #[error("archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A remote management command failed.
    #[error("{program} failed: {message}")]
    Remote {
        /// The program that failed (`rpcclient` or `smbclient`).
        program: &'static str,
        /// Trimmed stderr of the failing invocation.
        message: String,
    },

    /// A file could not be transferred to or from the driver store.
    #[error("transfer of {path} failed: {message}")]
    Transfer {
        /// The share-relative or local path being transferred.
        path: String,
        /// Description of the failure.
        message: String,
    },

    /// The configuration file exists but could not be parsed.
    #[error("invalid config {path}: {reason}")]
    Config {
        /// Path of the offending file.
        path: Utf8PathBuf,
        /// Description of the parse error.
        reason: String,
    },

    /// Neither the CLI nor the configuration file named a host.
    #[error("no {side} host given; pass --host or set it in spoolmig.toml")]
    MissingHost {
        /// Which side of the migration lacked a host.
        side: &'static str,
    },

    /// No archives were selected or discovered for processing.
    #[error("no driver archives found in {directory}")]
    NoArchives {
        /// The directory that was scanned.
        directory: Utf8PathBuf,
    },

    /// Test stub received an unexpected or mismatched command invocation.
    #[cfg(any(test, feature = "test-support"))]
    #[error("stub mismatch: {message}")]
    StubMismatch {
        /// Description of what was expected versus what was received.
        message: String,
    },
}

/// Result type alias using [`MigratorError`].
pub type Result<T> = std::result::Result<T, MigratorError>;
