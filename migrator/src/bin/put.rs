//! Destination-side CLI entrypoint.
//!
//! Uploads local driver archives into a destination print server's driver
//! store and registers each driver. Archives come from the command line,
//! or from scanning a directory with `--all`; finding nothing to deploy is
//! an error.

use clap::Parser;
use env_logger::Builder as LogBuilder;
use spoolmig::cli::{PutCli, log_level};
use spoolmig::config::{CONFIG_FILE, FileConfig, resolve_endpoint};
use spoolmig::destination::{DestinationHost, discover_archives, registration_version};
use spoolmig::error::{MigratorError, Result};
use spoolmig::exec::SystemCommandExecutor;

fn main() {
    let cli = PutCli::parse();
    LogBuilder::new()
        .filter_level(log_level(cli.verbosity))
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &PutCli) -> Result<()> {
    let config = FileConfig::load(camino::Utf8Path::new(CONFIG_FILE))?;
    let endpoint = resolve_endpoint(&config.destination, &cli.overrides(), "destination")?;
    let executor = SystemCommandExecutor;
    let destination = DestinationHost::new(endpoint);

    let archives = if cli.all {
        discover_archives(&cli.directory)?
    } else if cli.archives.is_empty() {
        return Err(MigratorError::NoArchives {
            directory: cli.directory.clone(),
        });
    } else {
        cli.archives.clone()
    };

    for archive in &archives {
        let response = destination.deploy(&executor, archive, registration_version())?;
        let trimmed = response.trim();
        if !trimmed.is_empty() {
            println!("{trimmed}");
        }
    }
    Ok(())
}
