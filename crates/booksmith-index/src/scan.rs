//! Markdown detection over directory trees.

use std::path::Path;

use walkdir::WalkDir;

/// Basename that marks a directory's landing page.
pub const README: &str = "README.md";

/// Whether a file name has a `.md` extension, compared case-insensitively.
pub fn is_markdown(name: &str) -> bool {
    name.len() >= 3
        && name.is_char_boundary(name.len() - 3)
        && name[name.len() - 3..].eq_ignore_ascii_case(".md")
}

/// Whether `dir` has a `README.md` regular file directly inside it.
pub fn has_readme(dir: &Path) -> bool {
    dir.join(README).is_file()
}

/// Whether `dir` or any of its descendants holds a Markdown file.
///
/// Unreadable entries are treated as absent; they never abort the scan.
pub fn has_markdown_files(dir: &Path) -> bool {
    if has_readme(dir) {
        return true;
    }

    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_type().is_dir())
        .any(|e| is_markdown(&e.file_name().to_string_lossy()))
}
