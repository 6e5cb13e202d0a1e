use anyhow::Result as _Result;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillshareError {
    #[error("Config Error: {message}")]
    Config { message: String },

    #[error("Config not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Config already exists: {path}")]
    ConfigExists { path: String },

    #[error("Target not found: {name}")]
    TargetNotFound { name: String },

    #[error("Target already exists: {name}")]
    TargetExists { name: String },

    #[error("TOML Parse Error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML Serialize Error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Inquire Error: {0}")]
    Inquire(#[from] inquire::InquireError),
}

impl SkillshareError {
    pub fn display_localized(&self) -> String {
        match self {
            SkillshareError::Config { message } => {
                t!("errors.config_error", message = message).to_string()
            }
            SkillshareError::ConfigNotFound { path } => {
                t!("errors.config_not_found", path = path).to_string()
            }
            SkillshareError::ConfigExists { path } => {
                t!("errors.config_exists", path = path).to_string()
            }
            SkillshareError::TargetNotFound { name } => {
                t!("errors.target_not_found", name = name).to_string()
            }
            SkillshareError::TargetExists { name } => {
                t!("errors.target_exists", name = name).to_string()
            }
            SkillshareError::Inquire(e) => t!("errors.prompt_failed", error = e).to_string(),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = _Result<T, SkillshareError>;
