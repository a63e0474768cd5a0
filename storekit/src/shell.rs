//! `shell`
//!
//! Running the external device tools.

use std::{ffi::OsStr, io, process::Command};

use crate::errors::CaptureError;

/// What an external command produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the command exited successfully.
    pub success: bool,
    /// Raw standard output.
    pub stdout: Vec<u8>,
    /// Raw standard error.
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// A successful run that printed `stdout`.
    pub fn ok(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    /// A failed run that printed `stderr`.
    pub fn failed(stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            success: false,
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }

    /// Standard output as text, with invalid UTF-8 replaced.
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

impl From<std::process::Output> for CommandOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

/// Something that can run a program to completion and collect its output.
pub trait CommandRunner {
    /// Runs `program` with `args`, waiting for it to exit.
    ///
    /// # Errors
    /// Any error starting the program. A non-zero exit is not an error here.
    fn run(&self, program: &str, args: &[&OsStr]) -> io::Result<CommandOutput>;
}

/// Runs commands on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&OsStr]) -> io::Result<CommandOutput> {
        log::debug!("Running {}", command_line(program, args));
        Command::new(program).args(args).output().map(CommandOutput::from)
    }
}

/// Runs a command and turns a non-zero exit into an error.
///
/// # Errors
/// [`CaptureError::Spawn`] if the program could not start, or
/// [`CaptureError::CommandFailed`] carrying its stderr if it exited with failure.
pub fn run_checked(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[&OsStr],
) -> Result<CommandOutput, CaptureError> {
    let output = runner
        .run(program, args)
        .map_err(|source| CaptureError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.success {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stderr = if stderr.is_empty() {
            "unknown error".to_string()
        } else {
            stderr
        };
        return Err(CaptureError::CommandFailed {
            command: command_line(program, args),
            stderr,
        });
    }

    Ok(output)
}

/// The command as it would be typed, for messages.
pub fn command_line(program: &str, args: &[&OsStr]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays one canned result.
    struct Canned(CommandOutput);

    impl CommandRunner for Canned {
        fn run(&self, _program: &str, _args: &[&OsStr]) -> io::Result<CommandOutput> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn failure_carries_stderr() {
        let runner = Canned(CommandOutput::failed("error: device offline\n"));
        let err = run_checked(&runner, "adb", &[OsStr::new("devices")]).expect_err("fails");

        match err {
            CaptureError::CommandFailed { command, stderr } => {
                assert_eq!(command, "adb devices", "command");
                assert_eq!(stderr, "error: device offline", "stderr");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn silent_failure_is_unknown() {
        let runner = Canned(CommandOutput::failed(""));
        let err = run_checked(&runner, "xcrun", &[]).expect_err("fails");

        assert_eq!(err.to_string(), "xcrun failed: unknown error", "message");
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let err = run_checked(&SystemRunner, "storekit-no-such-program", &[]).expect_err("fails");

        assert!(matches!(err, CaptureError::Spawn { .. }), "{err:?}");
    }
}
