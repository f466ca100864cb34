//! Subprocess execution behind a trait so toolchain logic can be tested.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// A program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Executable name or path
    pub program: String,

    /// Arguments, passed verbatim
    pub args: Vec<String>,

    /// Working directory for the child
    pub current_dir: Option<PathBuf>,

    /// Hand the child our stdin as well as stdout/stderr
    pub interactive: bool,
}

impl CommandSpec {
    /// Create an invocation of `program` with `args`.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            current_dir: None,
            interactive: false,
        }
    }

    /// Run the child inside `dir`.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Connect stdin as well.
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Errors from toolchain commands.
#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("{command} exited with {status}")]
    Failed { command: String, status: ExitStatus },

    #[error("{0} not found on PATH. Check your Rust install.")]
    NotFound(String),

    #[error("Rust toolchain installation was declined")]
    Declined,

    #[error("Failed to read confirmation: {0}")]
    Prompt(String),

    #[error("Directory not found: {0}")]
    MissingDir(PathBuf),
}

/// Runs external programs.
pub trait CommandRunner {
    /// Whether `program` resolves on `PATH`.
    fn exists(&self, program: &str) -> bool;

    /// Run to completion, streaming the child's output to ours.
    ///
    /// A non-zero exit is an error.
    fn run(&self, command: &CommandSpec) -> Result<(), ToolchainError>;

    /// Run to completion and capture stdout. Stderr is discarded.
    fn output(&self, command: &CommandSpec) -> Result<String, ToolchainError>;
}

/// Runs programs with `std::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn exists(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn run(&self, command: &CommandSpec) -> Result<(), ToolchainError> {
        tracing::debug!("Running {}", command);

        let mut child = command.to_command();
        child.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        child.stdin(if command.interactive {
            Stdio::inherit()
        } else {
            Stdio::null()
        });

        let status = child.status().map_err(|source| ToolchainError::Spawn {
            command: command.to_string(),
            source,
        })?;

        if !status.success() {
            return Err(ToolchainError::Failed {
                command: command.to_string(),
                status,
            });
        }

        Ok(())
    }

    fn output(&self, command: &CommandSpec) -> Result<String, ToolchainError> {
        tracing::debug!("Capturing {}", command);

        let output = command
            .to_command()
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ToolchainError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ToolchainError::Failed {
                command: command.to_string(),
                status: output.status,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
