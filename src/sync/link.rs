use crate::path_utils::{absolute_lexical, safe_parent_for_creation};
use crate::sync::SyncError;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Creates `target` as a symlink to `source`, creating the target's parent
/// directories first. The link text is always absolute, so a relative
/// `source` is anchored at the current directory rather than at the link.
///
/// Fails when anything already occupies `target`.
pub fn link_to(target: &Path, source: &Path) -> Result<(), SyncError> {
    if let Some(parent) = safe_parent_for_creation(target) {
        fs::create_dir_all(parent).map_err(|e| SyncError::CreateTargetParent {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let original = absolute_lexical(source);
    create_symlink(&original, target).map_err(|e| SyncError::CreateSymlink {
        link: target.to_path_buf(),
        original: original.clone(),
        source: e,
    })?;
    debug!(link = %target.display(), original = %original.display(), "created symlink");
    Ok(())
}

/// Best effort: whatever is left behind surfaces when the link is recreated.
pub(crate) fn remove_broken_link(target: &Path) {
    if let Err(e) = fs::remove_file(target) {
        // Windows directory symlinks are removed like directories.
        if fs::remove_dir(target).is_err() {
            debug!(path = %target.display(), error = %e, "could not remove broken link");
        }
    }
}

#[cfg(unix)]
pub(crate) fn create_symlink(original: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(windows)]
pub(crate) fn create_symlink(original: &Path, link: &Path) -> io::Result<()> {
    let resolved = crate::path_utils::resolve_link_text(link, original);
    if resolved.is_file() {
        std::os::windows::fs::symlink_file(original, link)
    } else {
        std::os::windows::fs::symlink_dir(original, link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    #[test]
    fn test_link_to_creates_missing_parents() {
        let temp = TempDir::new().expect("temp dir");
        let source = temp.path().join("source");
        fs::create_dir_all(&source).expect("create source");
        let target = temp.path().join("deep").join("nested").join("skills");

        link_to(&target, &source).expect("link");

        let meta = fs::symlink_metadata(&target).expect("metadata");
        assert!(meta.file_type().is_symlink());
        assert_eq!(fs::read_link(&target).expect("read link"), source);
    }

    #[cfg(unix)]
    #[test]
    fn test_link_to_writes_absolute_text_for_relative_source() {
        let temp = TempDir::new().expect("temp dir");
        let work = temp.path().join("work");
        fs::create_dir_all(work.join("skills")).expect("create source");
        let mut process = crate::test_utils::TestProcess::new();
        process.set_current_dir(&work);

        let target = temp.path().join("t").join("skill");
        link_to(&target, Path::new("skills")).expect("link");

        let cwd = std::env::current_dir().expect("cwd");
        assert_eq!(fs::read_link(&target).expect("read link"), cwd.join("skills"));
    }

    #[test]
    fn test_link_to_refuses_occupied_target() {
        let temp = TempDir::new().expect("temp dir");
        let source = temp.path().join("source");
        fs::create_dir_all(&source).expect("create source");
        let target = temp.path().join("skills");
        fs::create_dir_all(&target).expect("create target");

        let err = link_to(&target, &source).expect_err("occupied target");
        assert!(matches!(err, SyncError::CreateSymlink { .. }));
        assert!(fs::symlink_metadata(&target).expect("meta").is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_broken_link_ignores_missing_entry() {
        let temp = TempDir::new().expect("temp dir");
        remove_broken_link(&temp.path().join("missing"));

        let link = temp.path().join("dangling");
        create_symlink(&temp.path().join("nowhere"), &link).expect("symlink");
        remove_broken_link(&link);
        assert!(fs::symlink_metadata(&link).is_err());
    }
}
