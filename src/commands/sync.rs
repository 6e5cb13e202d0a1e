use crate::config::Config;
use crate::sync::{SyncAction, SyncOutcome, reconcile};
use anyhow::{Result, anyhow};
use clap::Args;
use std::path::Path;
use tracing::warn;

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Only sync this target
    pub target: Option<String>,

    /// Show what would change without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Reconciles the selected targets one after another. A failing target does
/// not stop the others; the command fails at the end if any target did.
pub fn run(config_dir: &Path, args: &SyncArgs) -> Result<()> {
    let config = Config::load(config_dir)?;
    let source = config.source_path()?;

    let names: Vec<&str> = match &args.target {
        Some(name) => {
            config.target(name)?;
            vec![name.as_str()]
        }
        None => config.targets.keys().map(String::as_str).collect(),
    };

    if names.is_empty() {
        println!("{}", t!("sync.no_targets"));
        return Ok(());
    }
    if args.dry_run {
        println!("{}", t!("sync.dry_run_banner"));
    }

    let mut failed = 0usize;
    for name in names {
        let target = config.target(name)?.expanded_path()?;
        match reconcile(name, &target, &source, args.dry_run) {
            Ok(outcome) => print_outcome(&outcome, &target, &source),
            Err(e) => {
                failed += 1;
                warn!(target_name = name, error = %e, "sync failed");
                eprintln!("{}", t!("sync.target_failed", name = name, error = e));
            }
        }
    }

    if failed > 0 {
        return Err(anyhow!(t!("sync.failed_count", count = failed)));
    }
    Ok(())
}

fn print_outcome(outcome: &SyncOutcome, target: &Path, source: &Path) {
    let name = outcome.name.as_str();
    match (outcome.action, outcome.dry_run) {
        (SyncAction::None, _) => println!("{}", t!("sync.already_linked", name = name)),
        (SyncAction::CreateLink, true) => println!(
            "{}",
            t!(
                "sync.dry_run.create_link",
                target = target.display(),
                source = source.display()
            )
        ),
        (SyncAction::CreateLink, false) => println!(
            "{}",
            t!(
                "sync.linked",
                name = name,
                target = target.display(),
                source = source.display()
            )
        ),
        (SyncAction::MigrateThenLink, true) => println!(
            "{}",
            t!(
                "sync.dry_run.migrate",
                target = target.display(),
                source = source.display()
            )
        ),
        (SyncAction::MigrateThenLink, false) => {
            println!("{}", t!("sync.migrated", name = name));
            if let Some(report) = &outcome.merge {
                for skipped in &report.skipped {
                    println!("{}", t!("sync.skip_exists", path = skipped.display()));
                }
            }
        }
        (SyncAction::RepairLink, true) => println!(
            "{}",
            t!("sync.dry_run.repair", target = target.display())
        ),
        (SyncAction::RepairLink, false) => println!("{}", t!("sync.repaired", name = name)),
        (SyncAction::Refuse | SyncAction::Unrecognized, _) => {}
    }
}
