//! `SUMMARY.md` generation for a documentation tree.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::config::IndexConfig;
use crate::mirror::create_dir_all;
use crate::walker::{read_sorted, WalkStats, Walker};

/// Result of an index generation run.
#[derive(Debug)]
pub struct IndexReport {
    /// Path of the written `SUMMARY.md`
    pub summary_path: PathBuf,

    /// Number of list items in the summary
    pub entries: usize,

    /// Number of files mirrored into the generator input directory
    pub mirrored: usize,

    /// Number of mirror failures that were logged and skipped
    pub mirror_failures: usize,

    /// Total generation time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during index generation.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create summary file {}: {source}", path.display())]
    CreateSummary {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write summary file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to mirror {} to {}: {source}", from.display(), to.display())]
    Mirror {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// Generates `SUMMARY.md` and mirrors the pages it links to.
pub struct IndexGenerator {
    config: IndexConfig,
}

impl IndexGenerator {
    /// Create a new generator.
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    /// Write the summary, walking the first chapter and then every other
    /// top-level directory in name order.
    pub fn generate(&self) -> Result<IndexReport, IndexError> {
        let start = Instant::now();
        let dest_dir = self.config.dest_dir();
        let summary_path = self.config.summary_path();

        create_dir_all(&dest_dir).map_err(|source| IndexError::CreateDir {
            path: dest_dir.clone(),
            source,
        })?;

        let file = File::create(&summary_path).map_err(|source| IndexError::CreateSummary {
            path: summary_path.clone(),
            source,
        })?;

        let stats = self
            .write_summary(BufWriter::new(file))
            .map_err(|source| IndexError::Write {
                path: summary_path.clone(),
                source,
            })?;

        Ok(IndexReport {
            summary_path,
            entries: stats.entries,
            mirrored: stats.mirrored,
            mirror_failures: stats.mirror_failures,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Write the full summary document to `out`.
    pub fn write_summary<W: Write>(&self, mut out: W) -> std::io::Result<WalkStats> {
        let source_dir = self.config.source_dir();
        let first_chapter = self.config.first_chapter.as_str();

        writeln!(out, "# Summary")?;
        let mut walker = Walker::new(&self.config, out);

        let first_dir = source_dir.join(first_chapter);
        if first_dir.is_dir() {
            walker.walk(&first_dir, first_chapter, "")?;
        }

        for entry in read_sorted(source_dir) {
            if !entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if name == first_chapter || self.config.is_ignored(&name) {
                continue;
            }

            walker.walk(entry.path(), &name, "")?;
        }

        let stats = walker.stats();
        walker.into_inner().flush()?;

        Ok(stats)
    }
}

/// Generate the summary for `config` in one call.
pub fn generate_index(config: &IndexConfig) -> Result<IndexReport, IndexError> {
    IndexGenerator::new(config.clone()).generate()
}
