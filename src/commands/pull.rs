use crate::config::Config;
use crate::interactive::{confirm_pull, is_interactive};
use crate::skills::{LocalSkill, PullOutcome, find_local_skills, pull_skill};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Args, Debug)]
pub struct PullArgs {
    /// Target to collect local skills from
    pub target: Option<String>,

    /// Collect from every configured target
    #[arg(short, long, conflicts_with = "target")]
    pub all: bool,

    /// Show what would be copied without copying
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PullSummary {
    pub copied: Vec<String>,
    pub skipped: Vec<String>,
}

/// Copies skills that were created directly inside target directories back
/// into the source so they can be shared.
pub fn run(config_dir: &Path, args: &PullArgs) -> Result<()> {
    let config = Config::load(config_dir)?;

    let names: Vec<&str> = match (&args.target, args.all) {
        (Some(name), _) => {
            config.target(name)?;
            vec![name.as_str()]
        }
        (None, true) => config.targets.keys().map(String::as_str).collect(),
        (None, false) if config.targets.len() <= 1 => {
            config.targets.keys().map(String::as_str).collect()
        }
        (None, false) => {
            println!("{}", t!("pull.specify_target"));
            for name in config.targets.keys() {
                println!("  {name}");
            }
            return Ok(());
        }
    };

    let mut local = Vec::new();
    for name in names {
        let path = config.target(name)?.expanded_path()?;
        local.extend(find_local_skills(name, &path)?);
    }

    if local.is_empty() {
        println!("{}", t!("pull.no_local_skills"));
        return Ok(());
    }

    println!("{}", t!("pull.found_header", count = local.len()));
    for skill in &local {
        println!(
            "{}",
            t!("pull.found_item", name = skill.name, target = skill.target)
        );
    }

    if args.dry_run {
        println!("{}", t!("pull.dry_run"));
        return Ok(());
    }

    if !args.force && !confirm_pull(local.len(), is_interactive())? {
        println!("{}", t!("pull.cancelled"));
        return Ok(());
    }

    let summary = pull_all(&local, &config.source_path()?)?;
    println!(
        "{}",
        t!(
            "pull.summary",
            copied = summary.copied.len(),
            skipped = summary.skipped.len()
        )
    );
    Ok(())
}

fn pull_all(skills: &[LocalSkill], source: &Path) -> Result<PullSummary> {
    let mut summary = PullSummary::default();
    for skill in skills {
        match pull_skill(skill, source)? {
            PullOutcome::Copied => {
                println!("{}", t!("pull.copied", name = skill.name));
                summary.copied.push(skill.name.clone());
            }
            PullOutcome::Skipped => {
                println!("{}", t!("pull.skipped", name = skill.name));
                summary.skipped.push(skill.name.clone());
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::SKILL_FILE;
    use std::fs;
    use tempfile::TempDir;

    fn setup(temp: &TempDir, targets: &[&str]) -> std::path::PathBuf {
        let config_dir = temp.path().join("config");
        let source = temp.path().join("source");
        fs::create_dir_all(&source).expect("create source");
        let mut config = Config::new(source.to_string_lossy().to_string());
        for name in targets {
            let path = temp.path().join(name);
            fs::create_dir_all(&path).expect("create target");
            config
                .add_target(name, &path.to_string_lossy())
                .expect("add target");
        }
        config.save(&config_dir).expect("save");
        config_dir
    }

    fn local_skill(temp: &TempDir, target: &str, name: &str, content: &str) {
        let dir = temp.path().join(target).join(name);
        fs::create_dir_all(&dir).expect("create skill");
        fs::write(dir.join(SKILL_FILE), content).expect("write skill");
    }

    #[test]
    fn test_pull_copies_into_source() {
        let temp = TempDir::new().expect("temp dir");
        let config_dir = setup(&temp, &["claude"]);
        local_skill(&temp, "claude", "new-skill", "# New Skill Content");

        let args = PullArgs {
            target: None,
            all: false,
            dry_run: false,
            force: true,
        };
        run(&config_dir, &args).expect("pull");

        let copied = temp.path().join("source").join("new-skill").join(SKILL_FILE);
        assert_eq!(
            fs::read_to_string(copied).expect("read"),
            "# New Skill Content"
        );
    }

    #[test]
    fn test_pull_dry_run_copies_nothing() {
        let temp = TempDir::new().expect("temp dir");
        let config_dir = setup(&temp, &["claude", "codex"]);
        local_skill(&temp, "claude", "claude-skill", "# Claude");
        local_skill(&temp, "codex", "codex-skill", "# Codex");

        let args = PullArgs {
            target: None,
            all: true,
            dry_run: true,
            force: false,
        };
        run(&config_dir, &args).expect("pull");

        assert!(!temp.path().join("source").join("claude-skill").exists());
        assert!(!temp.path().join("source").join("codex-skill").exists());
    }

    #[test]
    fn test_pull_multiple_targets_without_selection_is_noop() {
        let temp = TempDir::new().expect("temp dir");
        let config_dir = setup(&temp, &["claude", "codex"]);
        local_skill(&temp, "claude", "skill1", "# 1");

        let args = PullArgs {
            target: None,
            all: false,
            dry_run: false,
            force: true,
        };
        run(&config_dir, &args).expect("pull");
        assert!(!temp.path().join("source").join("skill1").exists());
    }

    #[test]
    fn test_pull_unknown_target_fails() {
        let temp = TempDir::new().expect("temp dir");
        let config_dir = setup(&temp, &[]);
        let args = PullArgs {
            target: Some("nonexistent".to_string()),
            all: false,
            dry_run: true,
            force: false,
        };
        let err = run(&config_dir, &args).expect_err("unknown target");
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_pull_all_keeps_existing_source_version() {
        let temp = TempDir::new().expect("temp dir");
        let config_dir = setup(&temp, &["claude"]);
        let existing = temp.path().join("source").join("existing-skill");
        fs::create_dir_all(&existing).expect("create existing");
        fs::write(existing.join(SKILL_FILE), "# Source Version").expect("write");
        local_skill(&temp, "claude", "existing-skill", "# Target Version");
        local_skill(&temp, "claude", "fresh", "# Fresh");

        let skills = find_local_skills("claude", &temp.path().join("claude")).expect("find");
        let summary = pull_all(&skills, &temp.path().join("source")).expect("pull");

        assert_eq!(summary.copied, vec!["fresh".to_string()]);
        assert_eq!(summary.skipped, vec!["existing-skill".to_string()]);
        assert_eq!(
            fs::read_to_string(existing.join(SKILL_FILE)).expect("read"),
            "# Source Version"
        );
    }
}
