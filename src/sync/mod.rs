//! Keeps target directories linked to the skills source.
//!
//! [`check_status`] classifies a target, [`plan`] maps the status to an
//! action, and [`reconcile`] performs it. Nothing in here prints; callers
//! render the returned [`SyncOutcome`].

mod engine;
mod error;
mod link;
mod migrate;
mod status;

pub use engine::{SyncAction, SyncOutcome, plan, reconcile};
pub use error::SyncError;
pub use link::link_to;
pub use migrate::{MergeReport, copy_directory, migrate};
pub use status::{TargetStatus, check_status};
