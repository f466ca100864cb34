//! Recursive directory walk that writes summary entries and mirrors pages.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::IndexConfig;
use crate::mirror::mirror_file;
use crate::prettify::prettify;
use crate::scan::{has_markdown_files, has_readme, is_markdown, README};

/// Counters accumulated over a walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    /// Summary list items written
    pub entries: usize,

    /// Files copied into the generator input directory
    pub mirrored: usize,

    /// Copies that failed; their entries were still written
    pub mirror_failures: usize,
}

/// Walks a documentation tree, appending `SUMMARY.md` lines to `out`.
pub struct Walker<'a, W> {
    config: &'a IndexConfig,
    dest_dir: PathBuf,
    out: W,
    stats: WalkStats,
}

impl<'a, W: Write> Walker<'a, W> {
    /// Create a walker writing summary lines to `out`.
    pub fn new(config: &'a IndexConfig, out: W) -> Self {
        Self {
            config,
            dest_dir: config.dest_dir(),
            out,
            stats: WalkStats::default(),
        }
    }

    /// Counters so far.
    pub fn stats(&self) -> WalkStats {
        self.stats
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Process one directory and everything below it.
    ///
    /// `relative_path` is the `/`-separated path of `current_dir` from the
    /// source root and prefixes every link. `indent` is the directory entry's
    /// indentation; files sit two spaces deeper and subdirectories recurse
    /// with two more spaces.
    ///
    /// Only writes to `out` can fail. Unreadable directories enumerate as
    /// empty and failed copies are logged and counted.
    pub fn walk(
        &mut self,
        current_dir: &Path,
        relative_path: &str,
        indent: &str,
    ) -> io::Result<()> {
        // Never descend into our own output
        if current_dir.starts_with(&self.dest_dir) {
            tracing::debug!("Skipping generator input {}", current_dir.display());
            return Ok(());
        }

        let include = has_markdown_files(current_dir);
        let title = prettify(&file_name(current_dir));

        if has_readme(current_dir) {
            writeln!(self.out, "{indent}- [{title}]({relative_path}/README.md)")?;
            self.stats.entries += 1;
            self.mirror(&current_dir.join(README), relative_path);
        } else if include {
            writeln!(self.out, "{indent}- [{title}]()")?;
            self.stats.entries += 1;
        }

        let (files, subdirs): (Vec<DirEntry>, Vec<DirEntry>) = read_sorted(current_dir)
            .into_iter()
            .partition(|e| !e.file_type().is_dir());

        for file in files {
            let name = file_name(file.path());
            if name == README || !is_markdown(&name) {
                continue;
            }

            let title = prettify(&file_stem(file.path()));
            writeln!(self.out, "{indent}  - [{title}]({relative_path}/{name})")?;
            self.stats.entries += 1;
            self.mirror(file.path(), relative_path);
        }

        if include {
            writeln!(self.out)?;
        }

        let nested = format!("{indent}  ");
        for dir in subdirs {
            let name = file_name(dir.path());
            if self.config.is_ignored(&name) {
                tracing::debug!("Ignoring {}", dir.path().display());
                continue;
            }

            self.walk(dir.path(), &format!("{relative_path}/{name}"), &nested)?;
        }

        Ok(())
    }

    /// Copy a page to the same relative location under the generator input.
    ///
    /// The target keeps the source's raw file name; `relative_path` is only
    /// used when `source` lies outside the source root.
    fn mirror(&mut self, source: &Path, relative_path: &str) {
        let target = match source.strip_prefix(self.config.source_dir()) {
            Ok(relative) => self.dest_dir.join(relative),
            Err(_) => self
                .dest_dir
                .join(relative_path)
                .join(source.file_name().unwrap_or_default()),
        };

        match mirror_file(source, &target) {
            Ok(()) => {
                tracing::debug!("Mirrored {} -> {}", source.display(), target.display());
                self.stats.mirrored += 1;
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.stats.mirror_failures += 1;
            }
        }
    }
}

/// Direct children of `dir`, sorted by name. Read errors yield no entries.
pub(crate) fn read_sorted(dir: &Path) -> Vec<DirEntry> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", dir.display(), e);
                None
            }
        })
        .collect()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
