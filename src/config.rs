use crate::error::SkillshareError;
use crate::path_utils::{absolute_lexical, validate_path_str};
use anyhow::{Result, anyhow};
use directories::ProjectDirs;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const ENV_CONFIG_DIR: &str = "SKILLSHARE_CONFIG_DIR";
pub const APP_NAME: &str = "skillshare";
pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_SOURCE_DIR: &str = "skills";

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([A-Za-z0-9_]+)|\$\{([^}]+)\}").expect("valid env var pattern")
});

pub fn resolve_config_dir(cli_override: Option<&Path>) -> Result<PathBuf> {
    let env_override = env::var(ENV_CONFIG_DIR).ok();
    resolve_config_dir_with(cli_override, env_override.as_deref())
}

pub fn resolve_config_dir_with(
    cli_override: Option<&Path>,
    env_override: Option<&str>,
) -> Result<PathBuf> {
    if let Some(path) = cli_override {
        validate_path_str(&path.to_string_lossy())
            .map_err(|e| anyhow!(t!("errors.invalid_config_dir", error = e)))?;
        return Ok(path.to_path_buf());
    }

    if let Some(env_config_dir) = env_override {
        validate_path_str(env_config_dir)
            .map_err(|e| anyhow!(t!("errors.invalid_config_dir_env", error = e)))?;
        return Ok(PathBuf::from(env_config_dir));
    }

    let project_dirs = ProjectDirs::from("", "", APP_NAME)
        .ok_or_else(|| anyhow!(t!("errors.not_find_config_dir")))?;
    Ok(project_dirs.config_dir().to_path_buf())
}

/// A directory some tool reads skills from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetConfig {
    pub path: String,
}

impl TargetConfig {
    pub fn expanded_path(&self) -> Result<PathBuf> {
        expand_path(&self.path)
    }
}

/// Contents of `config.toml`. Paths are stored as written so `~` and `$VAR`
/// survive a save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub source: String,
    #[serde(default)]
    pub targets: BTreeMap<String, TargetConfig>,
}

impl Config {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            targets: BTreeMap::new(),
        }
    }

    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE)
    }

    pub fn load(config_dir: &Path) -> Result<Self> {
        let path = Self::path_in(config_dir);
        if !path.exists() {
            return Err(SkillshareError::ConfigNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| anyhow!(t!("errors.config_read_failed", error = e)))?;
        let config: Config = toml::from_str(&content).map_err(SkillshareError::from)?;
        validate_path_str(&config.source).map_err(|e| SkillshareError::Config {
            message: t!("errors.source_invalid", error = e).to_string(),
        })?;
        Ok(config)
    }

    pub fn save(&self, config_dir: &Path) -> Result<()> {
        fs::create_dir_all(config_dir)?;
        let content = toml::to_string_pretty(self).map_err(SkillshareError::from)?;
        fs::write(Self::path_in(config_dir), content)?;
        Ok(())
    }

    /// Expanded source directory, anchored at the current directory when the
    /// configured value is relative.
    pub fn source_path(&self) -> Result<PathBuf> {
        Ok(absolute_lexical(&expand_path(&self.source)?))
    }

    pub fn target(&self, name: &str) -> Result<&TargetConfig> {
        self.targets.get(name).ok_or_else(|| {
            SkillshareError::TargetNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    pub fn add_target(&mut self, name: &str, path: &str) -> Result<()> {
        validate_path_str(path).map_err(|e| SkillshareError::Config {
            message: t!("errors.target_path_invalid", name = name, error = e).to_string(),
        })?;
        if self.targets.contains_key(name) {
            return Err(SkillshareError::TargetExists {
                name: name.to_string(),
            }
            .into());
        }
        self.targets.insert(
            name.to_string(),
            TargetConfig {
                path: path.to_string(),
            },
        );
        Ok(())
    }

    pub fn remove_target(&mut self, name: &str) -> Result<TargetConfig> {
        self.targets.remove(name).ok_or_else(|| {
            SkillshareError::TargetNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }
}

pub fn expand_path(raw: &str) -> Result<PathBuf> {
    validate_path_str(raw).map_err(|e| anyhow!(t!("errors.invalid_path", error = e)))?;
    let expanded = expand_env_vars(raw);
    let path = expand_tilde(&expanded)?;
    Ok(PathBuf::from(path))
}

fn expand_tilde(path: &str) -> Result<String> {
    if path == "~" || path.starts_with("~/") {
        let home = dirs::home_dir().ok_or_else(|| anyhow!(t!("errors.home_missing")))?;
        if path == "~" {
            return Ok(home.to_string_lossy().to_string());
        }
        let trimmed = path.trim_start_matches("~/");
        return Ok(home.join(trimmed).to_string_lossy().to_string());
    }
    Ok(path.to_string())
}

fn expand_env_vars(input: &str) -> String {
    ENV_VAR_PATTERN
        .replace_all(input, |caps: &regex::Captures| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            match caps.get(1).or_else(|| caps.get(2)) {
                Some(key) => env::var(key.as_str()).unwrap_or_else(|_| whole.to_string()),
                None => whole.to_string(),
            }
        })
        .to_string()
}
