//! Runs `mdbook build` and `mdbook serve` against a book root.

use std::path::Path;

use crate::runner::{CommandRunner, CommandSpec, SystemRunner, ToolchainError};

/// Invokes the mdBook generator.
pub struct Mdbook<R = SystemRunner> {
    runner: R,
    binary: String,
}

impl Mdbook<SystemRunner> {
    /// Create an invoker for `binary` that runs real commands.
    pub fn new(binary: impl Into<String>) -> Self {
        Self::with_runner(SystemRunner, binary)
    }
}

impl Default for Mdbook<SystemRunner> {
    fn default() -> Self {
        Self::new("mdbook")
    }
}

impl<R: CommandRunner> Mdbook<R> {
    /// Create an invoker over a custom runner.
    pub fn with_runner(runner: R, binary: impl Into<String>) -> Self {
        Self {
            runner,
            binary: binary.into(),
        }
    }

    /// The underlying runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Build the book rooted at `book_root` into HTML.
    pub fn build(&self, book_root: &Path) -> Result<(), ToolchainError> {
        tracing::info!("Building the mdBook...");

        let root = book_root.to_string_lossy();
        self.runner
            .run(&CommandSpec::new(self.binary.as_str(), ["build", &*root]))?;

        tracing::info!("Build complete!");
        Ok(())
    }

    /// Serve the book from `book_root` and open it in a browser.
    ///
    /// Blocks until the server exits; stdin is connected so Ctrl+C reaches it.
    pub fn serve(&self, book_root: &Path) -> Result<(), ToolchainError> {
        if !book_root.is_dir() {
            return Err(ToolchainError::MissingDir(book_root.to_path_buf()));
        }

        tracing::info!("Serving mdBook on localhost...");

        let command = CommandSpec::new(self.binary.as_str(), ["serve", "--open"])
            .in_dir(book_root)
            .interactive();
        self.runner.run(&command)
    }
}
