//! SUMMARY.md generation command.

use anyhow::{Context, Result};
use booksmith_index::{IndexConfig, IndexGenerator};

/// Run the generate-index command.
pub fn run(config: &IndexConfig) -> Result<()> {
    tracing::info!("Generating index for {}...", config.source_dir().display());

    let report = IndexGenerator::new(config.clone())
        .generate()
        .context("Failed to generate SUMMARY.md")?;

    tracing::debug!(
        "Wrote {} entries and mirrored {} files in {}ms",
        report.entries,
        report.mirrored,
        report.duration_ms
    );

    if report.mirror_failures > 0 {
        tracing::warn!(
            "{} files could not be mirrored; mdbook will report their links as broken",
            report.mirror_failures
        );
    }

    tracing::info!("SUMMARY.md generated at {}", report.summary_path.display());

    Ok(())
}
