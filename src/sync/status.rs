use crate::path_utils::{absolute_lexical, resolve_link_text};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Relationship of a target path to the source directory.
///
/// Always derived from the filesystem at the moment of the check; nothing here
/// is cached between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    /// The target could not be inspected, or is something other than a
    /// directory or symlink.
    Unknown,
    /// Live symlink to the source.
    Linked,
    /// Nothing exists at the target path.
    NotExist,
    /// Real directory that has to be migrated before linking.
    HasFiles,
    /// Symlink pointing somewhere other than the source.
    Conflict,
    /// Symlink whose text names the source, but the source is unreachable.
    Broken,
}

impl fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TargetStatus::Unknown => "unknown",
            TargetStatus::Linked => "linked",
            TargetStatus::NotExist => "not exist",
            TargetStatus::HasFiles => "has files",
            TargetStatus::Conflict => "conflict",
            TargetStatus::Broken => "broken",
        };
        f.write_str(label)
    }
}

/// Classifies `target` against `source` without side effects.
///
/// Only the immediate link text is compared; a chain of symlinks that
/// eventually reaches the source is still reported as [`TargetStatus::Conflict`].
pub fn check_status(target: &Path, source: &Path) -> TargetStatus {
    let meta = match fs::symlink_metadata(target) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return TargetStatus::NotExist,
        Err(e) => {
            debug!(path = %target.display(), error = %e, "cannot stat target");
            return TargetStatus::Unknown;
        }
    };

    if meta.file_type().is_symlink() {
        let link_text = match fs::read_link(target) {
            Ok(link_text) => link_text,
            Err(e) => {
                debug!(path = %target.display(), error = %e, "cannot read link");
                return TargetStatus::Unknown;
            }
        };
        let destination = absolute_lexical(&resolve_link_text(target, &link_text));
        if destination != absolute_lexical(source) {
            return TargetStatus::Conflict;
        }
        return match fs::metadata(target) {
            Ok(_) => TargetStatus::Linked,
            Err(_) => TargetStatus::Broken,
        };
    }

    if meta.is_dir() {
        return TargetStatus::HasFiles;
    }

    TargetStatus::Unknown
}
