use crate::config::Config;
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Args, Debug)]
pub struct TargetArgs {
    #[command(subcommand)]
    pub command: TargetCommands,
}

#[derive(Subcommand, Debug)]
pub enum TargetCommands {
    /// Register a directory that should link to the source
    Add {
        /// Name of the target, e.g. claude
        name: String,
        /// Directory the tool reads skills from
        path: String,
    },
    /// Forget a target (the directory itself is left untouched)
    #[command(alias = "rm")]
    Remove { name: String },
    /// Show configured targets
    #[command(alias = "ls")]
    List,
}

pub fn run(config_dir: &Path, args: &TargetArgs) -> Result<()> {
    let mut config = Config::load(config_dir)?;
    match &args.command {
        TargetCommands::Add { name, path } => {
            config.add_target(name, path)?;
            config.save(config_dir)?;
            println!("{}", t!("target.added", name = name, path = path));
            println!("{}", t!("target.run_sync"));
        }
        TargetCommands::Remove { name } => {
            let removed = config.remove_target(name)?;
            config.save(config_dir)?;
            println!("{}", t!("target.removed", name = name));
            println!("{}", t!("target.left_untouched", path = removed.path));
        }
        TargetCommands::List => {
            if config.targets.is_empty() {
                println!("{}", t!("target.none"));
                return Ok(());
            }
            for (name, target) in &config.targets {
                println!("  {name}: {}", target.path);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_add_then_remove_target() {
        let temp = TempDir::new().expect("temp dir");
        Config::new("/s").save(temp.path()).expect("save");

        let add = TargetArgs {
            command: TargetCommands::Add {
                name: "claude".to_string(),
                path: "~/.claude/skills".to_string(),
            },
        };
        run(temp.path(), &add).expect("add");
        let config = Config::load(temp.path()).expect("load");
        assert_eq!(
            config.target("claude").expect("target").path,
            "~/.claude/skills"
        );

        assert!(run(temp.path(), &add).is_err());

        let remove = TargetArgs {
            command: TargetCommands::Remove {
                name: "claude".to_string(),
            },
        };
        run(temp.path(), &remove).expect("remove");
        assert!(Config::load(temp.path()).expect("load").targets.is_empty());
        assert!(run(temp.path(), &remove).is_err());
    }
}
