//! mdBook toolchain management for booksmith.
//!
//! Installs or updates mdBook through Cargo, then runs its `build` and
//! `serve` subcommands against a prepared book root.

pub mod invoker;
pub mod runner;
pub mod toolchain;
pub mod version;

pub use invoker::Mdbook;
pub use runner::{CommandRunner, CommandSpec, SystemRunner, ToolchainError};
pub use toolchain::{Bootstrapper, InstallPolicy, MdbookStatus};
pub use version::{is_latest, parse_installed_version, parse_latest_version, VersionError};
