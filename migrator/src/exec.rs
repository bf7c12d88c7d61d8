//! External command execution abstraction.
//!
//! Everything that touches a remote server goes through one of two local
//! programs, `rpcclient` and `smbclient`. The [`CommandExecutor`] trait is
//! the only seam where processes are actually spawned, so the rest of the
//! crate stays testable without a print server on hand.

use crate::error::{MigratorError, Result};
use std::process::{Command, Output};

/// Abstraction for running external commands.
#[cfg_attr(test, mockall::automock)]
pub trait CommandExecutor {
    /// Runs a command with arguments and returns the captured output.
    ///
    /// # Errors
    ///
    /// Returns any I/O errors encountered while spawning or running the
    /// command.
    fn run(&self, program: &str, args: &[String]) -> Result<Output>;
}

/// Executes commands on the host system.
///
/// # Examples
///
/// ```no_run
/// use spoolmig::exec::{CommandExecutor, SystemCommandExecutor};
///
/// let executor = SystemCommandExecutor;
/// let output = executor.run("rpcclient", &["--version".to_owned()])?;
/// assert!(output.status.success());
/// # Ok::<(), spoolmig::error::MigratorError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandExecutor;

impl CommandExecutor for SystemCommandExecutor {
    fn run(&self, program: &str, args: &[String]) -> Result<Output> {
        Command::new(program)
            .args(args)
            .output()
            .map_err(MigratorError::from)
    }
}
