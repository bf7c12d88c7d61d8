//! Shared test utilities for the migrator crate.

use crate::error::{MigratorError, Result};
use crate::exec::CommandExecutor;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::process::{ExitStatus, Output};

/// Creates an `ExitStatus` from an exit code (Unix implementation).
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;

    ExitStatus::from_raw(code << 8)
}

/// Creates an `ExitStatus` from an exit code (Windows implementation).
#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;

    ExitStatus::from_raw(code as u32)
}

/// Creates a successful command `Output` with empty stdout and stderr.
pub fn success_output() -> Output {
    Output {
        status: exit_status(0),
        stdout: Vec::new(),
        stderr: Vec::new(),
    }
}

/// Creates a successful command `Output` carrying the given stdout.
pub fn output_with_stdout(stdout: &str) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.as_bytes().to_vec(),
        stderr: Vec::new(),
    }
}

/// Creates a failed command `Output` with the given stderr message.
pub fn failure_output(stderr: &str) -> Output {
    Output {
        status: exit_status(1),
        stdout: Vec::new(),
        stderr: stderr.as_bytes().to_vec(),
    }
}

/// Represents an expected command invocation for testing.
#[derive(Debug)]
pub struct ExpectedCall {
    /// The program to execute (e.g., `rpcclient`).
    pub program: &'static str,
    /// The arguments to pass to the program.
    pub args: Vec<String>,
    /// The result to return when this invocation arrives.
    pub result: Result<Output>,
}

/// A scripted implementation of `CommandExecutor` for testing.
///
/// Holds an ordered queue of expected invocations and returns the
/// predefined results, letting tests drive whole orchestration flows
/// without spawning processes.
#[derive(Debug)]
pub struct StubExecutor {
    expected: RefCell<VecDeque<ExpectedCall>>,
}

impl StubExecutor {
    /// Creates a new `StubExecutor` with the given expected calls.
    #[must_use]
    pub fn new(expected: Vec<ExpectedCall>) -> Self {
        Self {
            expected: RefCell::new(expected.into()),
        }
    }

    /// Asserts that all expected invocations have been consumed.
    ///
    /// # Panics
    ///
    /// Panics if expected calls remain uninvoked.
    pub fn assert_finished(&self) {
        assert!(
            self.expected.borrow().is_empty(),
            "expected no further command invocations"
        );
    }
}

impl CommandExecutor for StubExecutor {
    fn run(&self, program: &str, args: &[String]) -> Result<Output> {
        let mut expected = self.expected.borrow_mut();
        let Some(call) = expected.pop_front() else {
            return Err(MigratorError::StubMismatch {
                message: format!("unexpected invocation of {program}"),
            });
        };

        if call.program != program || call.args.as_slice() != args {
            return Err(MigratorError::StubMismatch {
                message: format!(
                    "expected {} {:?}, got {program} {args:?}",
                    call.program, call.args
                ),
            });
        }

        call.result
    }
}
