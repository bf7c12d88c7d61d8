//! Fatal error types for the spoolmig core.
//!
//! Every condition here aborts the current parse, pack, or unpack call;
//! the core has no soft-recovery path. Variants carry the offending line,
//! key, or path so callers can report the failure precisely.

use thiserror::Error;

/// Errors raised while parsing `rpcclient` enumeration or detail output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A line did not match the `key:[value]` grammar.
    #[error("malformed line: {line:?}")]
    MalformedLine {
        /// The offending input line.
        line: String,
    },

    /// A line matched neither a data pattern nor a known ignorable pattern.
    #[error("unrecognized line: {line:?}")]
    UnrecognizedLine {
        /// The offending input line.
        line: String,
    },

    /// A `flags` key appeared while a printer record was still accumulating.
    #[error("record start ({key}) with {pending} field(s) pending")]
    UnexpectedRecordStart {
        /// The key that signalled the new record.
        key: String,
        /// Number of fields already accumulated.
        pending: usize,
    },

    /// A required field was absent when a record was finalized.
    #[error("missing field: {field}")]
    MissingField {
        /// The absent field.
        field: &'static str,
    },

    /// A scalar detail key occurred a second time.
    #[error("duplicate key: {key}")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },

    /// A detail key outside the known field set.
    #[error("unknown field: {key}")]
    UnknownField {
        /// The unexpected key.
        key: String,
    },
}

/// Errors raised while interpreting a remote file reference.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// The reference is not a two-backslash `\\host\share\path` form.
    #[error("invalid path format: {path:?}")]
    InvalidPathFormat {
        /// The offending reference.
        path: String,
    },

    /// The reference names a share other than the driver store.
    #[error("unexpected share {share:?} in {path:?}")]
    UnexpectedShare {
        /// The offending reference.
        path: String,
        /// The share it named.
        share: String,
    },
}

/// Errors raised by the archive codec.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The manifest references a file absent from the archive (unpack), or
    /// a referenced file was not supplied to the packer (pack).
    #[error("archive entry missing: {path}")]
    MissingArchiveEntry {
        /// The relative path that could not be resolved.
        path: String,
    },

    /// A path-bearing record field could not be normalized.
    #[error(transparent)]
    Path(#[from] PathError),

    /// The manifest entry could not be serialized or deserialized.
    #[error("manifest codec error: {0}")]
    Json(#[from] serde_json::Error),

    /// The zip container itself was unreadable or unwritable.
    #[error("archive container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// An in-memory I/O operation on the container failed.
    #[error("archive I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_line_message_quotes_input() {
        let err = ParseError::MalformedLine {
            line: "no brackets here".to_owned(),
        };
        assert!(err.to_string().contains("no brackets here"));
    }

    #[test]
    fn unexpected_share_message_names_share() {
        let err = PathError::UnexpectedShare {
            path: r"\\srv\public\x.dll".to_owned(),
            share: "public".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("public"));
        assert!(msg.contains("x.dll"));
    }

    #[test]
    fn missing_entry_message_names_path() {
        let err = ArchiveError::MissingArchiveEntry {
            path: "w32x86/3/driver.dll".to_owned(),
        };
        assert!(err.to_string().contains("w32x86/3/driver.dll"));
    }
}
