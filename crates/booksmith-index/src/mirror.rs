//! Copying source Markdown into the generator input directory.

use std::fs::{self, DirBuilder};
use std::path::Path;

use crate::generator::IndexError;

/// Create `dir` and any missing ancestors with mode `0755`.
pub(crate) fn create_dir_all(dir: &Path) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(dir)
}

/// Copy `from` to `to` byte for byte, creating parent directories as needed.
///
/// Any existing file at `to` is replaced.
pub fn mirror_file(from: &Path, to: &Path) -> Result<(), IndexError> {
    let mirror_err = |source| IndexError::Mirror {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    if let Some(parent) = to.parent() {
        create_dir_all(parent).map_err(mirror_err)?;
    }

    fs::copy(from, to).map_err(mirror_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copies_into_new_directories() {
        let temp = tempdir().unwrap();
        let from = temp.path().join("guide.md");
        let to = temp.path().join("src").join("a").join("b").join("guide.md");
        fs::write(&from, "# Guide\n").unwrap();

        mirror_file(&from, &to).unwrap();

        assert_eq!(fs::read(&to).unwrap(), b"# Guide\n");
    }

    #[test]
    fn replaces_existing_content() {
        let temp = tempdir().unwrap();
        let from = temp.path().join("page.md");
        let to = temp.path().join("out.md");
        fs::write(&from, "new").unwrap();
        fs::write(&to, "old content that is longer").unwrap();

        mirror_file(&from, &to).unwrap();

        assert_eq!(fs::read_to_string(&to).unwrap(), "new");
    }

    #[test]
    fn copies_bytes_exactly() {
        let temp = tempdir().unwrap();
        let from = temp.path().join("binary.md");
        let to = temp.path().join("copy").join("binary.md");
        let bytes: Vec<u8> = (0..=255).collect();
        fs::write(&from, &bytes).unwrap();

        mirror_file(&from, &to).unwrap();

        assert_eq!(fs::read(&to).unwrap(), bytes);
    }

    #[test]
    fn reports_missing_source() {
        let temp = tempdir().unwrap();
        let from = temp.path().join("missing.md");
        let to = temp.path().join("out").join("missing.md");

        let result = mirror_file(&from, &to);

        assert!(matches!(result, Err(IndexError::Mirror { .. })));
        assert!(!to.exists());
    }

    #[cfg(unix)]
    #[test]
    fn creates_directories_with_0755() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let dir = temp.path().join("made");

        create_dir_all(&dir).unwrap();

        let mode = fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        // umask can only clear bits
        assert_eq!(mode & !0o755, 0);
    }
}
