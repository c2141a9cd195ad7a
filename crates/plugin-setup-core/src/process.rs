//! External process execution
//!
//! All subprocesses go through [`CommandRunner`] so that the bootstrap can be
//! exercised without git, pip or pre-commit installed.

use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

/// A command line to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<Utf8PathBuf>,
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Utf8Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// The command line as typed in a shell, without cwd or env
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Captured output of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Why a command did not succeed
#[derive(Error, Debug)]
pub enum ProcessError {
    /// Executable not found on PATH
    #[error("command not found: {program}")]
    NotFound { program: String },

    /// Process ran and exited unsuccessfully
    #[error("'{command}' returned non-zero exit status {}{}", exit_code(.code), stderr_suffix(.stderr))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Any other OS-level failure while spawning or waiting
    #[error("failed to run '{command}': {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

fn exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "(signal)".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

impl ProcessError {
    pub fn not_found(program: impl Into<String>) -> Self {
        Self::NotFound {
            program: program.into(),
        }
    }

    pub fn failed(command: impl Into<String>, code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::Failed {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    /// Classify a spawn error into missing executable vs. other OS error
    pub fn from_io(spec: &CommandSpec, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::not_found(&spec.program)
        } else {
            Self::Io {
                command: spec.command_line(),
                source,
            }
        }
    }
}

/// Executes commands, blocking until each one exits
pub trait CommandRunner {
    /// Run a command to completion, capturing output.
    ///
    /// A non-zero exit status is reported as [`ProcessError::Failed`].
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ProcessError>;

    /// Whether `program` can be found on PATH
    fn is_available(&self, program: &str) -> bool;
}

/// Runs commands on the host with [`std::process::Command`]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ProcessError> {
        debug!("Running: {}", spec);

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }
        for (key, value) in &spec.env {
            cmd.env(key, value);
        }

        let output = cmd.output().map_err(|e| ProcessError::from_io(spec, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            debug!("Command failed: {} ({:?})", spec, output.status.code());
            return Err(ProcessError::failed(
                spec.command_line(),
                output.status.code(),
                stderr,
            ));
        }

        Ok(CommandOutput { stdout, stderr })
    }

    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
