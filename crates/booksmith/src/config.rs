//! Optional `booksmith.toml` configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use booksmith_index::config::{DEFAULT_FIRST_CHAPTER, DEFAULT_IGNORED_DIRS};
use booksmith_index::IndexConfig;
use serde::Deserialize;

/// Configuration file structure (booksmith.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    docs: DocsConfig,
    #[serde(default)]
    mdbook: MdbookConfig,
}

#[derive(Debug, Deserialize)]
struct DocsConfig {
    #[serde(default = "default_docs_dir")]
    dir: String,
    #[serde(default = "default_first_chapter")]
    first_chapter: String,
    #[serde(default = "default_ignored_dirs")]
    ignored_dirs: Vec<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            dir: default_docs_dir(),
            first_chapter: default_first_chapter(),
            ignored_dirs: default_ignored_dirs(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MdbookConfig {
    #[serde(default = "default_binary")]
    binary: String,
}

impl Default for MdbookConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
        }
    }
}

fn default_docs_dir() -> String {
    "docs".to_string()
}
fn default_first_chapter() -> String {
    DEFAULT_FIRST_CHAPTER.to_string()
}
fn default_ignored_dirs() -> Vec<String> {
    DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect()
}
fn default_binary() -> String {
    "mdbook".to_string()
}

/// Resolved settings for a run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Index generation settings, including the book root
    pub index: IndexConfig,

    /// mdBook executable
    pub mdbook: String,
}

impl Default for Settings {
    fn default() -> Self {
        ConfigFile::default().into_settings()
    }
}

impl ConfigFile {
    fn into_settings(self) -> Settings {
        Settings {
            index: IndexConfig::new(self.docs.dir)
                .with_ignored_dirs(self.docs.ignored_dirs)
                .with_first_chapter(self.docs.first_chapter),
            mdbook: self.mdbook.binary,
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(file.into_settings())
}
