//! mdBook input synthesis for scattered Markdown documentation.
//!
//! Walks a documentation tree, writes the `SUMMARY.md` table of contents mdBook
//! requires, and mirrors every linked page into the book's `src/` directory.

pub mod config;
pub mod generator;
pub mod mirror;
pub mod prettify;
pub mod scan;
pub mod walker;

pub use config::IndexConfig;
pub use generator::{generate_index, IndexError, IndexGenerator, IndexReport};
pub use mirror::mirror_file;
pub use prettify::prettify;
pub use scan::{has_markdown_files, is_markdown};
pub use walker::{WalkStats, Walker};
