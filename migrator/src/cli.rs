//! CLI argument definitions for the spoolmig binaries.
//!
//! The flag letters follow the historical tools: lowercase short flags on
//! the source side, uppercase on the destination side, so a combined
//! `spoolmig.toml` never leaves an ambiguous flag pair.

use crate::config::HostSection;
use camino::Utf8PathBuf;
use clap::Parser;

/// Copy printer drivers from a source print server into local archives.
#[derive(Parser, Debug)]
#[command(name = "spoolmig-get")]
#[command(version, about)]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Archive every shared printer's driver from a host:\n",
    "    $ spoolmig-get -s oldsrv -u admin -p secret\n\n",
    "  Show the inventory without transferring anything:\n",
    "    $ spoolmig-get -s oldsrv --list\n\n",
    "Connection defaults are read from spoolmig.toml when present.",
))]
pub struct GetCli {
    /// Host to copy drivers from [default: from spoolmig.toml].
    #[arg(short = 's', long = "host", value_name = "HOSTNAME")]
    pub host: Option<String>,

    /// IP address of the source host.
    #[arg(short = 'a', long = "address", value_name = "IP_ADDRESS")]
    pub address: Option<String>,

    /// User for the source host.
    #[arg(short = 'u', long = "user", value_name = "USERNAME")]
    pub user: Option<String>,

    /// Password for the source host.
    #[arg(short = 'p', long = "password", value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Directory driver archives are written to.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: Utf8PathBuf,

    /// List printers and drivers without transferring anything.
    #[arg(long)]
    pub list: bool,

    /// Increase verbosity (repeatable: -v, -vv).
    #[arg(short, long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

/// Upload local driver archives to a destination print server and
/// register them.
#[derive(Parser, Debug)]
#[command(name = "spoolmig-put")]
#[command(version, about)]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Deploy two archives:\n",
    "    $ spoolmig-put -T newsrv a.zip b.zip\n\n",
    "  Deploy every archive in the current directory:\n",
    "    $ spoolmig-put -T newsrv --all\n\n",
    "Connection defaults are read from spoolmig.toml when present.",
))]
pub struct PutCli {
    /// Driver archives to deploy.
    #[arg(value_name = "ARCHIVE")]
    pub archives: Vec<Utf8PathBuf>,

    /// Deploy every .zip archive in the archive directory instead.
    #[arg(long, conflicts_with = "archives")]
    pub all: bool,

    /// Directory scanned by --all.
    #[arg(short = 'd', long = "directory", value_name = "DIR", default_value = ".")]
    pub directory: Utf8PathBuf,

    /// Host to copy drivers to [default: from spoolmig.toml].
    #[arg(short = 'T', long = "host", value_name = "HOSTNAME")]
    pub host: Option<String>,

    /// IP address of the destination host.
    #[arg(short = 'A', long = "address", value_name = "IP_ADDRESS")]
    pub address: Option<String>,

    /// User for the destination host.
    #[arg(short = 'U', long = "user", value_name = "USERNAME")]
    pub user: Option<String>,

    /// Password for the destination host.
    #[arg(short = 'P', long = "password", value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Increase verbosity (repeatable: -v, -vv).
    #[arg(short, long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl GetCli {
    /// The connection flags as a [`HostSection`] for config merging.
    #[must_use]
    pub fn overrides(&self) -> HostSection {
        HostSection {
            host: self.host.clone(),
            address: self.address.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }
}

impl PutCli {
    /// The connection flags as a [`HostSection`] for config merging.
    #[must_use]
    pub fn overrides(&self) -> HostSection {
        HostSection {
            host: self.host.clone(),
            address: self.address.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }
}

/// Map a repeated `-v` count to a log level: warnings by default, info at
/// `-v`, debug from `-vv` up.
#[must_use]
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
