//! Index generation settings.

use std::path::{Path, PathBuf};

/// Directory names never descended into, at any depth.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "scripts",
    "src",
    ".git",
    "node_modules",
    ".github",
    ".vscode",
];

/// Directory emitted before every other top-level section.
pub const DEFAULT_FIRST_CHAPTER: &str = "introduction";

/// Subdirectory of the source root that mdBook reads from.
pub const GENERATOR_INPUT_DIR: &str = "src";

/// Name of the generated table of contents.
pub const SUMMARY_FILE: &str = "SUMMARY.md";

/// Configuration for a single index generation run.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Root of the documentation tree
    source_dir: PathBuf,

    /// Directory names skipped during the walk (case-sensitive)
    pub ignored_dirs: Vec<String>,

    /// Directory name emitted first in the summary (case-sensitive)
    pub first_chapter: String,
}

impl IndexConfig {
    /// Create a config for `source_dir` with the default ignore set and first chapter.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            first_chapter: DEFAULT_FIRST_CHAPTER.to_string(),
        }
    }

    /// Replace the ignored directory names.
    pub fn with_ignored_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_dirs = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the first chapter name.
    pub fn with_first_chapter(mut self, name: impl Into<String>) -> Self {
        self.first_chapter = name.into();
        self
    }

    /// Source root.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Generator input directory, always `<source_dir>/src`.
    pub fn dest_dir(&self) -> PathBuf {
        self.source_dir.join(GENERATOR_INPUT_DIR)
    }

    /// Path of the generated `SUMMARY.md`.
    pub fn summary_path(&self) -> PathBuf {
        self.dest_dir().join(SUMMARY_FILE)
    }

    /// Whether a directory basename is in the ignore set.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_dirs.iter().any(|ignored| ignored == name)
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new("docs")
    }
}
