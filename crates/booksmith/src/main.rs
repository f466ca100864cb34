//! Booksmith CLI - build and preview mdBook documentation from a Markdown tree.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use booksmith_mdbook::InstallPolicy;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use config::{load_settings, Settings};

#[derive(Parser)]
#[command(name = "booksmith")]
#[command(about = "Build and preview mdBook documentation from a scattered Markdown tree")]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Step to run; without one, sets up mdBook, generates the index, builds and serves
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to booksmith.toml config file
    #[arg(short, long, default_value = "booksmith.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Install a missing Rust toolchain without asking
    #[arg(short, long, global = true)]
    yes: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate SUMMARY.md and mirror pages into the book's src directory
    GenerateIndex,

    /// Serve the book locally and open it in a browser
    Serve,

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::UnknownArgument => {
            let arg = match e.get(ContextKind::InvalidArg) {
                Some(ContextValue::String(arg)) => arg.clone(),
                _ => std::env::args().nth(1).unwrap_or_default(),
            };
            return unknown_command(&arg);
        }
        Err(e) => e.exit(),
    };

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let policy = if cli.yes {
        InstallPolicy::AssumeYes
    } else {
        InstallPolicy::Ask
    };

    // Execute command
    match cli.command {
        None => full_pipeline(&load_settings(&cli.config)?, policy)?,
        Some(Commands::GenerateIndex) => {
            let settings = load_settings(&cli.config)?;
            commands::generate_index::run(&settings.index)?;
        }
        Some(Commands::Serve) => {
            let settings = load_settings(&cli.config)?;
            commands::serve::run(&settings.mdbook, settings.index.source_dir())?;
        }
        Some(Commands::Unknown(args)) => {
            let name = args.first().map(String::as_str).unwrap_or_default();
            return Ok(unknown_command(name));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Report an unrecognized first argument and exit with status 1.
fn unknown_command(name: &str) -> ExitCode {
    println!("Unknown command: {}", name);
    println!("Usage: app [generate-index|serve]");
    ExitCode::from(1)
}

/// Setup, index, build, then serve.
fn full_pipeline(settings: &Settings, policy: InstallPolicy) -> Result<()> {
    let book_root = settings.index.source_dir();

    commands::setup::run(&settings.mdbook, policy)?;
    commands::generate_index::run(&settings.index)?;
    commands::build::run(&settings.mdbook, book_root)?;
    commands::serve::run(&settings.mdbook, book_root)?;

    Ok(())
}
