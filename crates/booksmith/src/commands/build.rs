//! HTML build command.

use std::path::Path;

use anyhow::{Context, Result};
use booksmith_mdbook::Mdbook;

/// Run the build command.
pub fn run(mdbook: &str, book_root: &Path) -> Result<()> {
    Mdbook::new(mdbook)
        .build(book_root)
        .context("Failed to build mdBook")
}
