use crate::config::{Config, DEFAULT_SOURCE_DIR, expand_path};
use crate::error::SkillshareError;
use crate::path_utils::absolute_lexical;
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Source directory holding the real skill files (default: <config-dir>/skills)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Overwrite an existing configuration (configured targets are kept)
    #[arg(short, long)]
    pub force: bool,
}

pub fn run(config_dir: &Path, args: &InitArgs) -> Result<()> {
    let config_path = Config::path_in(config_dir);
    let existing = if config_path.exists() {
        if !args.force {
            return Err(SkillshareError::ConfigExists {
                path: config_path.display().to_string(),
            }
            .into());
        }
        Config::load(config_dir).ok()
    } else {
        None
    };

    // `~` and `$VAR` are kept as written and expanded on load.
    let source = match &args.source {
        Some(path) if path.to_string_lossy().starts_with(['~', '$']) => {
            path.to_string_lossy().to_string()
        }
        Some(path) => absolute_lexical(path).to_string_lossy().to_string(),
        None => absolute_lexical(&config_dir.join(DEFAULT_SOURCE_DIR))
            .to_string_lossy()
            .to_string(),
    };

    let mut config = Config::new(source);
    if let Some(existing) = existing {
        config.targets = existing.targets;
    }

    let source_path = expand_path(&config.source)?;
    fs::create_dir_all(&source_path)?;
    config.save(config_dir)?;

    println!(
        "{}",
        t!("init.created", path = config_path.display())
    );
    println!("{}", t!("init.source", path = source_path.display()));
    println!("{}", t!("init.next_steps"));
    Ok(())
}
