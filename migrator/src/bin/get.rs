//! Source-side CLI entrypoint.
//!
//! Enumerates the shared printers on a source print server and archives
//! each printer's driver into the output directory. With `--list`, shows
//! the printer and driver inventory and exits without transferring.

use clap::Parser;
use env_logger::Builder as LogBuilder;
use log::info;
use spoolmig::cli::{GetCli, log_level};
use spoolmig::config::{CONFIG_FILE, FileConfig, resolve_endpoint};
use spoolmig::error::Result;
use spoolmig::exec::SystemCommandExecutor;
use spoolmig::source::SourceHost;

fn main() {
    let cli = GetCli::parse();
    LogBuilder::new()
        .filter_level(log_level(cli.verbosity))
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &GetCli) -> Result<()> {
    let config = FileConfig::load(camino::Utf8Path::new(CONFIG_FILE))?;
    let endpoint = resolve_endpoint(&config.source, &cli.overrides(), "source")?;
    let executor = SystemCommandExecutor;
    let source = SourceHost::new(endpoint);

    let printers = source.printers(&executor)?;
    let drivers = source.drivers(&executor)?;
    info!(
        "{} printer(s), {} driver(s) on {}",
        printers.len(),
        drivers.len(),
        source.name()
    );

    if cli.list {
        println!("Printers on {}:", source.name());
        for printer in &printers {
            println!("  {} [{}]", printer.name, printer.driver_name);
        }
        println!("Drivers on {}:", source.name());
        for driver in &drivers {
            println!("  {driver}");
        }
        return Ok(());
    }

    for printer in &printers {
        let archive = source.fetch_driver(&executor, printer, &cli.output_dir)?;
        println!("{archive}");
    }
    Ok(())
}
