//! External process invocation

use crate::{Error, Result};
use std::ffi::OsString;
use std::process::Command;

/// Captured result of a finished tool invocation
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    /// Whether the tool exited successfully
    pub success: bool,
    /// Captured standard error, lossily decoded
    pub stderr: String,
}

impl ToolOutput {
    /// Output of a tool that exited with status 0
    pub fn ok() -> Self {
        Self {
            code: Some(0),
            success: true,
            stderr: String::new(),
        }
    }

    /// Output of a tool that exited with `code`
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            success: false,
            stderr: stderr.into(),
        }
    }
}

/// Runs external programs; swapped for a fake in tests
pub trait ToolRunner {
    /// Runs `program` with `args` to completion.
    ///
    /// Returns `Err(Error::Spawn)` only when the program could not be started.
    fn run(&self, program: &str, args: &[OsString]) -> Result<ToolOutput>;

    /// Runs `program` and turns a non-zero exit into `Err(Error::ToolFailed)`
    fn run_checked(&self, program: &str, args: &[OsString]) -> Result<ToolOutput> {
        let output = self.run(program, args)?;
        if output.success {
            return Ok(output);
        }

        Err(Error::ToolFailed {
            program: program.to_string(),
            status: output
                .code
                .map_or_else(|| "signal".to_string(), |code| format!("status {code}")),
            stderr: output.stderr.trim().to_string(),
        })
    }
}

impl<T: ToolRunner + ?Sized> ToolRunner for &T {
    fn run(&self, program: &str, args: &[OsString]) -> Result<ToolOutput> {
        (**self).run(program, args)
    }
}

/// Runs tools as blocking child processes with captured output
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<ToolOutput> {
        tracing::debug!(program, ?args, "running tool");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| Error::Spawn {
                program: program.to_string(),
                source,
            })?;

        Ok(ToolOutput {
            code: output.status.code(),
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
