//! Preview server command.

use std::path::Path;

use anyhow::{Context, Result};
use booksmith_mdbook::Mdbook;

/// Run the serve command.
pub fn run(mdbook: &str, book_root: &Path) -> Result<()> {
    Mdbook::new(mdbook)
        .serve(book_root)
        .context("Error running mdbook serve")
}
