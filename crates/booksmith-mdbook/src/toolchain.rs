//! Ensures Rust, Cargo and an up-to-date mdBook are installed.

use std::io::IsTerminal;

use crate::runner::{CommandRunner, CommandSpec, SystemRunner, ToolchainError};
use crate::version::{is_latest, parse_installed_version, parse_latest_version};

const RUSTUP_INSTALL: &str =
    "curl --proto '=https' --tlsv1.2 -sSf https://sh.rustup.rs | sh -s -- -y";

/// How to handle a missing Rust toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallPolicy {
    /// Ask on a terminal; install without asking otherwise
    #[default]
    Ask,

    /// Install without asking
    AssumeYes,
}

/// What the bootstrapper ended up doing to mdBook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdbookStatus {
    /// Fresh install
    Installed,

    /// Already at the latest version
    UpToDate(String),

    /// Reinstalled, with the old and new versions when known
    Updated {
        from: Option<String>,
        to: Option<String>,
    },
}

/// Installs or updates the mdBook toolchain.
pub struct Bootstrapper<R = SystemRunner> {
    runner: R,
    binary: String,
    policy: InstallPolicy,
}

impl Bootstrapper<SystemRunner> {
    /// Create a bootstrapper that runs real commands.
    pub fn new(binary: impl Into<String>, policy: InstallPolicy) -> Self {
        Self::with_runner(SystemRunner, binary, policy)
    }
}

impl<R: CommandRunner> Bootstrapper<R> {
    /// Create a bootstrapper over a custom runner.
    pub fn with_runner(runner: R, binary: impl Into<String>, policy: InstallPolicy) -> Self {
        Self {
            runner,
            binary: binary.into(),
            policy,
        }
    }

    /// The underlying runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Make sure `rustup`, `cargo` and the latest mdBook are available.
    pub fn ensure(&self) -> Result<MdbookStatus, ToolchainError> {
        tracing::info!("Checking for Rust + mdBook...");

        if self.runner.exists("rustup") {
            tracing::info!("Rust is already installed.");
        } else {
            self.install_rust()?;
        }

        if !self.runner.exists("cargo") {
            return Err(ToolchainError::NotFound("cargo".to_string()));
        }

        if !self.runner.exists(&self.binary) {
            tracing::info!("Installing mdBook...");
            self.runner
                .run(&CommandSpec::new("cargo", ["install", "mdbook"]))?;
            return Ok(MdbookStatus::Installed);
        }

        let installed = match self.installed_version() {
            Ok(version) => version,
            Err(e) => {
                tracing::warn!("Could not get installed mdbook version ({}), reinstalling...", e);
                self.force_install()?;
                return Ok(MdbookStatus::Updated { from: None, to: None });
            }
        };

        let latest = match self.latest_version() {
            Ok(version) => version,
            Err(e) => {
                tracing::warn!("Could not get latest mdbook version ({}), updating...", e);
                self.force_install()?;
                return Ok(MdbookStatus::Updated {
                    from: Some(installed),
                    to: None,
                });
            }
        };

        if is_latest(&installed, &latest) {
            tracing::info!("mdBook is up-to-date (version {})", installed);
            return Ok(MdbookStatus::UpToDate(installed));
        }

        tracing::info!("Updating mdBook from {} to {}...", installed, latest);
        self.force_install()?;

        Ok(MdbookStatus::Updated {
            from: Some(installed),
            to: Some(latest),
        })
    }

    fn install_rust(&self) -> Result<(), ToolchainError> {
        if !self.confirm_rust_install()? {
            return Err(ToolchainError::Declined);
        }

        tracing::info!("Installing Rust...");
        self.runner
            .run(&CommandSpec::new("sh", ["-c", RUSTUP_INSTALL]).interactive())?;

        // The installer edits shell profiles, which this process never sees
        tracing::info!("Rust installed; a new shell may be needed for cargo to be on PATH.");
        Ok(())
    }

    fn confirm_rust_install(&self) -> Result<bool, ToolchainError> {
        if self.policy == InstallPolicy::AssumeYes || !std::io::stdin().is_terminal() {
            return Ok(true);
        }

        dialoguer::Confirm::new()
            .with_prompt("Rust is not installed. Install it with rustup?")
            .default(true)
            .interact()
            .map_err(|e| ToolchainError::Prompt(e.to_string()))
    }

    fn installed_version(&self) -> Result<String, Box<dyn std::error::Error>> {
        let output = self
            .runner
            .output(&CommandSpec::new(self.binary.as_str(), ["--version"]))?;
        Ok(parse_installed_version(&output)?)
    }

    fn latest_version(&self) -> Result<String, Box<dyn std::error::Error>> {
        let output = self
            .runner
            .output(&CommandSpec::new("cargo", ["search", "mdbook", "--limit", "1"]))?;
        Ok(parse_latest_version(&output)?)
    }

    fn force_install(&self) -> Result<(), ToolchainError> {
        self.runner
            .run(&CommandSpec::new("cargo", ["install", "mdbook", "--force"]))
    }
}
