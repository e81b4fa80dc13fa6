//! Example Scaffolding
//!
//! Copies the bundled example directory into a new project location.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::error::{MetafuncError, Result};

/// Copies the template at `src` to `dest`.
///
/// Fails with [`MetafuncError::DestinationExists`] before touching the
/// filesystem if `dest` is already present.
///
/// # Example
///
/// ```rust,no_run
/// use metafunc::scaffold::scaffold;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     scaffold("/opt/metafunc/example", "my_project")?;
///     Ok(())
/// }
/// ```
pub fn scaffold(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let (src, dest) = (src.as_ref(), dest.as_ref());

    if dest.exists() {
        return Err(MetafuncError::DestinationExists(dest.to_path_buf()));
    }

    copy_anything(src, dest)
}

/// Copies a directory tree, or a single file when `src` is not a directory.
pub fn copy_anything(src: &Path, dest: &Path) -> Result<()> {
    match copy_tree(src, dest) {
        Ok(()) => Ok(()),
        // read_dir on a regular file fails with ENOTDIR
        Err(e) if src.is_file() => {
            debug!("{} is not a directory ({}), copying as a file", src.display(), e);
            fs::copy(src, dest)
                .map(|_| ())
                .map_err(|e| MetafuncError::io(src, e))
        }
        Err(e) => Err(MetafuncError::io(src, e)),
    }
}

/// Recursively copies a directory. Fails before creating `dest` if `src` is a file.
fn copy_tree(src: &Path, dest: &Path) -> io::Result<()> {
    let entries = fs::read_dir(src)?;
    fs::create_dir_all(dest)?;
    debug!("Created directory: {}", dest.display());

    for entry in entries {
        let entry = entry?;
        let target = dest.join(entry.file_name());

        // follows symlinks, so a linked directory is copied as a tree
        if entry.path().is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_template(root: &Path) -> std::path::PathBuf {
        let src = root.join("example");
        fs::create_dir_all(src.join("data/raw")).unwrap();
        fs::create_dir_all(src.join("empty")).unwrap();
        fs::write(src.join("config.yaml"), "cores: 1\n").unwrap();
        fs::write(src.join("data/raw/sample.fa"), b">s1\nACGT\n").unwrap();
        src
    }

    #[test]
    fn test_scaffold_copies_tree() {
        let root = tempdir().unwrap();
        let src = make_template(root.path());
        let dest = root.path().join("project");

        scaffold(&src, &dest).unwrap();

        assert_eq!(fs::read(dest.join("config.yaml")).unwrap(), b"cores: 1\n");
        assert_eq!(fs::read(dest.join("data/raw/sample.fa")).unwrap(), b">s1\nACGT\n");
        assert!(dest.join("empty").is_dir());
    }

    #[test]
    fn test_scaffold_refuses_existing_destination() {
        let root = tempdir().unwrap();
        let src = make_template(root.path());
        let dest = root.path().join("project");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("keep.txt"), "mine").unwrap();

        let err = scaffold(&src, &dest).unwrap_err();
        assert!(matches!(err, MetafuncError::DestinationExists(_)));
        assert_eq!(fs::read_to_string(dest.join("keep.txt")).unwrap(), "mine");
        assert!(!dest.join("config.yaml").exists());
    }

    #[test]
    fn test_scaffold_twice_fails_second_time() {
        let root = tempdir().unwrap();
        let src = make_template(root.path());
        let dest = root.path().join("project");

        scaffold(&src, &dest).unwrap();
        assert!(matches!(scaffold(&src, &dest), Err(MetafuncError::DestinationExists(_))));
    }

    #[test]
    fn test_copy_anything_single_file() {
        let root = tempdir().unwrap();
        let src = root.path().join("Snakefile");
        fs::write(&src, "rule all:\n").unwrap();
        let dest = root.path().join("copy");

        copy_anything(&src, &dest).unwrap();
        assert_eq!(fs::read_to_string(dest).unwrap(), "rule all:\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_copied_as_tree() {
        let root = tempdir().unwrap();
        let src = make_template(root.path());
        let shared = root.path().join("shared");
        fs::create_dir(&shared).unwrap();
        fs::write(shared.join("ref.fa"), b">ref\nTTTT\n").unwrap();
        std::os::unix::fs::symlink(&shared, src.join("reference")).unwrap();
        let dest = root.path().join("project");

        scaffold(&src, &dest).unwrap();

        let copied = dest.join("reference");
        assert!(copied.is_dir());
        assert!(!fs::symlink_metadata(&copied).unwrap().file_type().is_symlink());
        assert_eq!(fs::read(copied.join("ref.fa")).unwrap(), b">ref\nTTTT\n");
    }

    #[test]
    fn test_missing_template_is_io_error() {
        let root = tempdir().unwrap();
        let err = scaffold(root.path().join("absent"), root.path().join("dest")).unwrap_err();
        assert!(matches!(err, MetafuncError::Io { .. }));
    }
}
