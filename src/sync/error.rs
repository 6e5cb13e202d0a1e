use crate::sync::TargetStatus;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the sync engine. Each variant names the step that failed and
/// the path it was working on.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("target is symlink to different location: {} -> {}", target.display(), link.display())]
    Conflict { target: PathBuf, link: PathBuf },

    #[error("unknown target status for {}: {status}", target.display())]
    UnknownStatus {
        target: PathBuf,
        status: TargetStatus,
    },

    #[error("failed to create source parent {}: {source}", path.display())]
    CreateSourceParent {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to merge {} into {}: {source}", from.display(), to.display())]
    Merge {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove target after merge {}: {source}", path.display())]
    RemoveAfterMerge {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {} to source {}: {source}", from.display(), to.display())]
    CopyFallback {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove original after copy {}: {source}", path.display())]
    RemoveAfterCopy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create target parent {}: {source}", path.display())]
    CreateTargetParent {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create symlink {} -> {}: {source}", link.display(), original.display())]
    CreateSymlink {
        link: PathBuf,
        original: PathBuf,
        #[source]
        source: io::Error,
    },
}
