use crate::sync::link::remove_broken_link;
use crate::sync::{MergeReport, SyncError, TargetStatus, check_status, link_to, migrate};
use std::fs;
use std::path::Path;
use tracing::debug;

/// What reconciling a target with a given status amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Already linked.
    None,
    CreateLink,
    /// Move the target's files into the source, then link.
    MigrateThenLink,
    /// Drop the dangling symlink and link again.
    RepairLink,
    /// The target links somewhere else; a human has to decide.
    Refuse,
    Unrecognized,
}

/// Result of reconciling one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub name: String,
    pub status: TargetStatus,
    pub action: SyncAction,
    pub dry_run: bool,
    /// Set when files were migrated into the source.
    pub merge: Option<MergeReport>,
}

pub fn plan(status: TargetStatus) -> SyncAction {
    match status {
        TargetStatus::Linked => SyncAction::None,
        TargetStatus::NotExist => SyncAction::CreateLink,
        TargetStatus::HasFiles => SyncAction::MigrateThenLink,
        TargetStatus::Conflict => SyncAction::Refuse,
        TargetStatus::Broken => SyncAction::RepairLink,
        TargetStatus::Unknown => SyncAction::Unrecognized,
    }
}

/// Drives `target` toward a live symlink to `source`.
///
/// With `dry_run` the planned action is returned without touching the
/// filesystem. Conflicting links and unrecognized entries fail in both modes.
pub fn reconcile(
    name: &str,
    target: &Path,
    source: &Path,
    dry_run: bool,
) -> Result<SyncOutcome, SyncError> {
    let status = check_status(target, source);
    let action = plan(status);
    debug!(
        name,
        path = %target.display(),
        %status,
        ?action,
        dry_run,
        "reconciling target"
    );

    let mut outcome = SyncOutcome {
        name: name.to_string(),
        status,
        action,
        dry_run,
        merge: None,
    };

    match action {
        SyncAction::None => {}
        SyncAction::Refuse => {
            let link = fs::read_link(target).unwrap_or_default();
            return Err(SyncError::Conflict {
                target: target.to_path_buf(),
                link,
            });
        }
        SyncAction::Unrecognized => {
            return Err(SyncError::UnknownStatus {
                target: target.to_path_buf(),
                status,
            });
        }
        _ if dry_run => {}
        SyncAction::CreateLink => link_to(target, source)?,
        SyncAction::MigrateThenLink => {
            outcome.merge = Some(migrate(target, source)?);
            link_to(target, source)?;
        }
        SyncAction::RepairLink => {
            remove_broken_link(target);
            link_to(target, source)?;
        }
    }

    Ok(outcome)
}
