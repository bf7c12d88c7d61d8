//! UNC reference splitting and path normalization.
//!
//! Driver files are reported by the remote tool as UNC references of the
//! form `\\<host>\print$\<relative-path>`. This module extracts the
//! share-relative part (kept raw for transfers, which address files by the
//! exact name the server printed) and canonicalizes it into the
//! host-independent form used inside archives: forward slashes, lower case.

use crate::error::PathError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed network share holding installed driver binaries.
pub const DRIVER_STORE_SHARE: &str = "print$";

/// Extract the share-relative path from a UNC driver-store reference.
///
/// The reference must have the canonical two-backslash form
/// `\\<host>\<share>\<relative-path>` and name the [`DRIVER_STORE_SHARE`].
/// The returned path keeps the server's original case and backslash
/// separators; use [`NormalizedPath`] for the archive form.
///
/// # Errors
///
/// Returns [`PathError::InvalidPathFormat`] when the reference does not
/// match the grammar, or [`PathError::UnexpectedShare`] when it names a
/// share other than the driver store.
///
/// # Examples
///
/// ```
/// use spoolmig_common::unc::share_relative;
///
/// let rel = share_relative(r"\\printsrv\print$\W32X86\3\pscript5.dll")?;
/// assert_eq!(rel, r"W32X86\3\pscript5.dll");
/// # Ok::<(), spoolmig_common::error::PathError>(())
/// ```
pub fn share_relative(reference: &str) -> Result<String, PathError> {
    let invalid = || PathError::InvalidPathFormat {
        path: reference.to_owned(),
    };

    let rest = reference.strip_prefix(r"\\").ok_or_else(invalid)?;
    let (host, rest) = rest.split_once('\\').ok_or_else(invalid)?;
    if host.is_empty() {
        return Err(invalid());
    }
    let (share, relative) = rest.split_once('\\').ok_or_else(invalid)?;
    if share != DRIVER_STORE_SHARE {
        return Err(PathError::UnexpectedShare {
            path: reference.to_owned(),
            share: share.to_owned(),
        });
    }
    Ok(relative.to_owned())
}

/// A host-independent relative path in canonical archive form.
///
/// Canonical form means backslashes replaced with forward slashes and all
/// characters lower-cased. Canonicalization is idempotent: constructing a
/// `NormalizedPath` from an already-canonical string returns it unchanged.
///
/// # Examples
///
/// ```
/// use spoolmig_common::unc::NormalizedPath;
///
/// let path = NormalizedPath::new(r"W32X86\3\PSCRIPT5.DLL");
/// assert_eq!(path.as_str(), "w32x86/3/pscript5.dll");
/// assert_eq!(NormalizedPath::new(path.as_str()), path);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    /// Canonicalize a relative path.
    #[must_use]
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(path.as_ref().replace('\\', "/").to_lowercase())
    }

    /// Extract and canonicalize the relative path of a UNC reference.
    ///
    /// # Errors
    ///
    /// Propagates the [`PathError`] conditions of [`share_relative`].
    pub fn from_unc(reference: &str) -> Result<Self, PathError> {
        Ok(Self::new(share_relative(reference)?))
    }

    /// Return the canonical path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first path component; the architecture directory for driver
    /// store paths.
    #[must_use]
    pub fn architecture_segment(&self) -> &str {
        self.0.split('/').next().unwrap_or(&self.0)
    }

    /// The final path component.
    #[must_use]
    pub fn basename(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl AsRef<str> for NormalizedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
