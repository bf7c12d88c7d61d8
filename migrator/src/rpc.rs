//! Running management commands over `rpcclient`.

use crate::endpoint::RemoteEndpoint;
use crate::error::{MigratorError, Result};
use crate::exec::CommandExecutor;
use log::debug;

/// The management client program.
pub const RPC_PROGRAM: &str = "rpcclient";

/// Run one `rpcclient -c` command against an endpoint and return its
/// decoded stdout.
///
/// Stdout is decoded lossily; the enumeration grammars are ASCII and any
/// mangled byte would fail the parse anyway. Credentials never appear in
/// the log line.
///
/// # Errors
///
/// Returns [`MigratorError::Remote`] with the trimmed stderr when the
/// client exits unsuccessfully, or the spawn error from the executor.
pub fn run_rpc(
    executor: &dyn CommandExecutor,
    endpoint: &RemoteEndpoint,
    command: &str,
) -> Result<String> {
    debug!("{RPC_PROGRAM} {} -c {command:?}", endpoint.host);
    let output = executor.run(RPC_PROGRAM, &endpoint.rpc_args(command))?;
    if !output.status.success() {
        return Err(MigratorError::Remote {
            program: RPC_PROGRAM,
            message: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
