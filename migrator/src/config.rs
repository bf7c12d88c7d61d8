//! Optional configuration file support.
//!
//! A `spoolmig.toml` in the working directory supplies defaults for the
//! connection flags, so recurring migrations do not need credentials on
//! the command line:
//!
//! ```toml
//! [source]
//! host = "oldsrv"
//! user = "admin"
//! password = "s3cret"
//!
//! [destination]
//! host = "newsrv"
//! address = "10.0.0.9"
//! ```
//!
//! CLI flags always win over file values.

use crate::endpoint::{Credentials, RemoteEndpoint};
use crate::error::{MigratorError, Result};
use camino::Utf8Path;
use serde::Deserialize;
use std::fs;

/// Default configuration file name, resolved in the working directory.
pub const CONFIG_FILE: &str = "spoolmig.toml";

/// Parsed configuration file contents.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileConfig {
    /// Defaults for the source host.
    #[serde(default)]
    pub source: HostSection,
    /// Defaults for the destination host.
    #[serde(default)]
    pub destination: HostSection,
}

/// Connection settings for one host, every field optional.
///
/// Also used for the CLI's override values, which share the same shape.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct HostSection {
    /// Host name.
    pub host: Option<String>,
    /// IP address override.
    pub address: Option<String>,
    /// Account name.
    pub user: Option<String>,
    /// Account password.
    pub password: Option<String>,
}

impl FileConfig {
    /// Load a configuration file, returning the empty default when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`MigratorError::Config`] when the file exists but is not
    /// valid TOML, and [`MigratorError::Io`] when it cannot be read.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|err| MigratorError::Config {
            path: path.to_owned(),
            reason: err.to_string(),
        })
    }
}

/// Merge a config section with CLI overrides into a connectable endpoint.
///
/// Overrides win field by field. Credentials only take effect when both a
/// user and a password are present after merging; a lone half is ignored
/// and the connection stays anonymous.
///
/// # Errors
///
/// Returns [`MigratorError::MissingHost`] when neither side names a host.
pub fn resolve_endpoint(
    section: &HostSection,
    overrides: &HostSection,
    side: &'static str,
) -> Result<RemoteEndpoint> {
    let host = overrides
        .host
        .clone()
        .or_else(|| section.host.clone())
        .ok_or(MigratorError::MissingHost { side })?;
    let address = overrides.address.clone().or_else(|| section.address.clone());
    let user = overrides.user.clone().or_else(|| section.user.clone());
    let password = overrides
        .password
        .clone()
        .or_else(|| section.password.clone());

    let credentials = match (user, password) {
        (Some(user), Some(password)) => Some(Credentials { user, password }),
        _ => None,
    };

    Ok(RemoteEndpoint {
        host,
        address,
        credentials,
    })
}
