//! mdBook version probing.

/// Errors parsing version output.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Unexpected mdbook version output: {0}")]
    Installed(String),

    #[error("Failed to parse latest mdbook version from cargo search output")]
    Latest,
}

/// Parse `mdbook --version` output such as `mdbook v0.4.40`.
pub fn parse_installed_version(output: &str) -> Result<String, VersionError> {
    let mut fields = output.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(_), Some(version)) => Ok(version.trim_start_matches('v').to_string()),
        _ => Err(VersionError::Installed(output.trim().to_string())),
    }
}

/// Parse the first line of `cargo search mdbook`, e.g.
/// `mdbook = "0.4.40"    # Creates a book from markdown files`.
///
/// The version is whatever sits between the first and last double quote.
pub fn parse_latest_version(output: &str) -> Result<String, VersionError> {
    let line = output.lines().next().ok_or(VersionError::Latest)?;

    match (line.find('"'), line.rfind('"')) {
        (Some(start), Some(end)) if end > start => Ok(line[start + 1..end].to_string()),
        _ => Err(VersionError::Latest),
    }
}

/// Whether the installed version is the latest published one.
pub fn is_latest(installed: &str, latest: &str) -> bool {
    installed.trim() == latest.trim()
}
