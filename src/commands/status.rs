use crate::config::Config;
use crate::sync::{TargetStatus, check_status};
use anyhow::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    pub name: String,
    pub path: PathBuf,
    pub status: TargetStatus,
}

/// Current status of every configured target, in name order.
pub fn collect(config: &Config) -> Result<Vec<TargetReport>> {
    let source = config.source_path()?;
    let mut reports = Vec::with_capacity(config.targets.len());
    for (name, target) in &config.targets {
        let path = target.expanded_path()?;
        let status = check_status(&path, &source);
        reports.push(TargetReport {
            name: name.clone(),
            path,
            status,
        });
    }
    Ok(reports)
}

pub fn run(config_dir: &Path) -> Result<()> {
    let config = Config::load(config_dir)?;
    let source = config.source_path()?;

    println!("{}", t!("status.source", path = source.display()));
    if !source.is_dir() {
        println!("{}", t!("status.source_missing"));
    }

    let reports = collect(&config)?;
    if reports.is_empty() {
        println!("{}", t!("status.no_targets"));
        return Ok(());
    }

    println!();
    println!("{}", t!("status.targets_header"));
    let width = reports.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for report in &reports {
        println!(
            "  {:<width$}  {:<9}  {}",
            report.name,
            report.status.to_string(),
            report.path.display(),
            width = width
        );
    }
    Ok(())
}
