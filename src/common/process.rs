use crate::error::{NiktoGateError, Result};
use log::{debug, warn};
use std::process::Command;

/// Captured result of a finished external process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    /// Build a successful output from the given stdout text
    pub fn from_stdout(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Standard output as a sequence of text lines
    pub fn stdout_lines(&self) -> impl Iterator<Item = &str> {
        self.stdout.lines()
    }
}

/// Spawns a process from a fully-formed argument vector.
///
/// Implementations must return `Ok` only for a zero exit; spawn failures and
/// non-zero exits are reported as [`NiktoGateError::ProcessExecution`].
pub trait ProcessRunner {
    fn run(&self, argv: &[String]) -> Result<ProcessOutput>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, argv: &[String]) -> Result<ProcessOutput> {
        (**self).run(argv)
    }
}

/// Runs commands through `std::process::Command` and waits for completion
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, argv: &[String]) -> Result<ProcessOutput> {
        let (command, args) = argv
            .split_first()
            .ok_or_else(|| NiktoGateError::ProcessExecution {
                command: String::new(),
                reason: "empty argument vector".to_string(),
            })?;

        debug!("Spawning {} with args: {:?}", command, args);

        let output = Command::new(command).args(args).output().map_err(|e| {
            NiktoGateError::ProcessExecution {
                command: command.clone(),
                reason: e.to_string(),
            }
        })?;

        let result = ProcessOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !result.success() {
            let code = result
                .status
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            warn!("{} exited with status {}", command, code);
            return Err(NiktoGateError::ProcessExecution {
                command: command.clone(),
                reason: format!("exit status {}: {}", code, result.stderr.trim()),
            });
        }

        Ok(result)
    }
}
