use crate::path_utils::safe_parent_for_creation;
use crate::sync::SyncError;
use crate::sync::link::create_symlink;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// What a migration did with the target's files. Paths are relative to the
/// migrated tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// The whole tree was moved with a single rename.
    pub renamed: bool,
    pub copied: Vec<PathBuf>,
    /// Files left out because the source already had them.
    pub skipped: Vec<PathBuf>,
}

/// Moves the real directory at `target` into `source` so `target` can be
/// replaced by a symlink.
///
/// When `source` is missing the tree is renamed into place, falling back to
/// copy-then-delete if the rename fails for any reason. When `source` exists
/// the trees are merged: files already present in `source` win, and `target`
/// is deleted afterwards including the files that were skipped.
pub fn migrate(target: &Path, source: &Path) -> Result<MergeReport, SyncError> {
    migrate_with(target, source, |from, to| fs::rename(from, to))
}

fn migrate_with(
    target: &Path,
    source: &Path,
    rename: impl FnOnce(&Path, &Path) -> io::Result<()>,
) -> Result<MergeReport, SyncError> {
    if let Some(parent) = safe_parent_for_creation(source) {
        fs::create_dir_all(parent).map_err(|e| SyncError::CreateSourceParent {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    if fs::metadata(source).is_ok() {
        let report = copy_tree(target, source, true).map_err(|e| SyncError::Merge {
            from: target.to_path_buf(),
            to: source.to_path_buf(),
            source: e,
        })?;
        fs::remove_dir_all(target).map_err(|e| SyncError::RemoveAfterMerge {
            path: target.to_path_buf(),
            source: e,
        })?;
        debug!(
            from = %target.display(),
            to = %source.display(),
            copied = report.copied.len(),
            skipped = report.skipped.len(),
            "merged target into source"
        );
        return Ok(report);
    }

    match rename(target, source) {
        Ok(()) => {
            debug!(from = %target.display(), to = %source.display(), "renamed target into source");
            return Ok(MergeReport {
                renamed: true,
                ..MergeReport::default()
            });
        }
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!(from = %target.display(), to = %source.display(), "rename crosses devices, copying instead");
        }
        Err(e) => {
            warn!(from = %target.display(), to = %source.display(), error = %e, "rename failed, copying instead");
        }
    }

    let report = copy_directory(target, source).map_err(|e| SyncError::CopyFallback {
        from: target.to_path_buf(),
        to: source.to_path_buf(),
        source: e,
    })?;
    fs::remove_dir_all(target).map_err(|e| SyncError::RemoveAfterCopy {
        path: target.to_path_buf(),
        source: e,
    })?;
    Ok(report)
}

/// Recursively copies `from` into `to`, overwriting files that already exist.
/// Symlinks inside the tree are recreated with the same link text.
pub fn copy_directory(from: &Path, to: &Path) -> io::Result<MergeReport> {
    copy_tree(from, to, false)
}

fn copy_tree(from: &Path, to: &Path, skip_existing: bool) -> io::Result<MergeReport> {
    let mut report = MergeReport::default();

    for entry in WalkDir::new(from).follow_links(false) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(io::Error::other)?
            .to_path_buf();
        let dest = to.join(&relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&dest)?;
            continue;
        }

        if skip_existing && fs::symlink_metadata(&dest).is_ok() {
            info!(path = %relative.display(), "skip (exists in source)");
            report.skipped.push(relative);
            continue;
        }

        if file_type.is_symlink() {
            let link_text = fs::read_link(entry.path())?;
            if fs::symlink_metadata(&dest).is_ok() {
                fs::remove_file(&dest)?;
            }
            create_symlink(&link_text, &dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
        report.copied.push(relative);
    }

    Ok(report)
}
