//! Platform-specific symlink operations.

use std::fs;
use std::io;
use std::path::Path;

/// Create a symlink at `link` pointing to the directory `target` (Unix)
#[cfg(unix)]
pub fn create_dir_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

/// Create a directory symlink (Windows, needs Developer Mode or elevation)
#[cfg(windows)]
pub fn create_dir_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

/// Remove whatever sits at `link` without following it.
///
/// Links and files are removed. A real directory is removed only when empty.
/// Returns `Ok(false)` when nothing was there.
pub fn remove_link(link: &Path) -> io::Result<bool> {
    let metadata = match fs::symlink_metadata(link) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    if metadata.is_dir() {
        fs::remove_dir(link)?;
        return Ok(true);
    }

    match fs::remove_file(link) {
        Ok(()) => Ok(true),
        // Directory symlinks on Windows are removed like directories.
        #[cfg(windows)]
        Err(_) if is_symlink(link).unwrap_or(false) => fs::remove_dir(link).map(|()| true),
        Err(e) => Err(e),
    }
}

/// Check if a path is a symlink
pub fn is_symlink(path: &Path) -> io::Result<bool> {
    let metadata = fs::symlink_metadata(path)?;
    Ok(metadata.file_type().is_symlink())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_and_remove_symlink() {
        let temp_dir = tempdir().unwrap();
        let target = temp_dir.path().join("home");
        fs::create_dir(&target).unwrap();
        let link = temp_dir.path().join("jdk");

        create_dir_symlink(&target, &link).unwrap();
        assert!(is_symlink(&link).unwrap());
        assert_eq!(fs::read_link(&link).unwrap(), target);

        assert!(remove_link(&link).unwrap());
        assert!(fs::symlink_metadata(&link).is_err());
        assert!(target.exists());
    }

    #[test]
    fn test_remove_missing_link() {
        let temp_dir = tempdir().unwrap();
        assert!(!remove_link(&temp_dir.path().join("jdk")).unwrap());
    }

    #[test]
    fn test_remove_dangling_link() {
        let temp_dir = tempdir().unwrap();
        let link = temp_dir.path().join("jdk");
        create_dir_symlink(&temp_dir.path().join("gone"), &link).unwrap();

        assert!(remove_link(&link).unwrap());
        assert!(fs::symlink_metadata(&link).is_err());
    }

    #[test]
    fn test_remove_regular_file() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("jdk");
        fs::write(&file, b"").unwrap();

        assert!(!is_symlink(&file).unwrap());
        assert!(remove_link(&file).unwrap());
    }

    #[test]
    fn test_remove_empty_directory() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path().join("jdk");
        fs::create_dir(&dir).unwrap();

        assert!(remove_link(&dir).unwrap());
        assert!(fs::symlink_metadata(&dir).is_err());
    }

    #[test]
    fn test_remove_non_empty_directory_fails() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path().join("jdk");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("keep.txt"), b"user data").unwrap();

        assert!(remove_link(&dir).is_err());
        assert!(dir.join("keep.txt").is_file());
    }

    #[test]
    fn test_remove_link_to_directory_keeps_target() {
        let temp_dir = tempdir().unwrap();
        let target = temp_dir.path().join("home");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("release"), b"JAVA_VERSION=17").unwrap();
        let link = temp_dir.path().join("jdk");
        create_dir_symlink(&target, &link).unwrap();

        assert!(remove_link(&link).unwrap());
        assert!(target.join("release").is_file());
    }
}
