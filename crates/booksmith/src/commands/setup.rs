//! Toolchain setup step.

use anyhow::{Context, Result};
use booksmith_mdbook::{Bootstrapper, InstallPolicy, MdbookStatus};

/// Make sure Rust and the latest mdBook are installed.
pub fn run(mdbook: &str, policy: InstallPolicy) -> Result<MdbookStatus> {
    Bootstrapper::new(mdbook, policy)
        .ensure()
        .context("Failed to set up the mdBook toolchain")
}
