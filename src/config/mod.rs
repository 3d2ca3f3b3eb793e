//! Configuration for the registration form.
//!
//! The config lives in `.regform/config.md` as YAML frontmatter. Every section
//! is optional; missing sections fall back to the built-in defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::field::RoleOptions;
use crate::validation::PasswordPolicy;

pub mod defaults;
pub mod validation;

pub use defaults::*;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "REGFORM_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub password: PasswordPolicy,
    /// Role options offered to the user, in display order
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
    #[serde(default)]
    pub phone: PhoneConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            password: PasswordPolicy::default(),
            roles: default_roles(),
            phone: PhoneConfig::default(),
        }
    }
}

impl Config {
    /// Load the config from `$REGFORM_CONFIG` or `.regform/config.md`.
    ///
    /// A missing file is not an error: the defaults apply.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        let config: Config = if frontmatter.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?
        };

        config.validate()?;

        Ok(config)
    }

    pub fn role_options(&self) -> RoleOptions {
        RoleOptions::new(self.roles.clone())
    }

    /// Render this config as a config document (frontmatter plus a short body).
    pub fn to_document(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config")?;
        Ok(format!(
            "---\n{}---\n\n# Registration form\n\nPassword policy, role options and phone requirement for `regform`.\n",
            yaml
        ))
    }
}

/// Path of the config file, honoring [`CONFIG_ENV`].
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(crate::paths::CONFIG_FILE))
}

/// Split a `---` delimited YAML frontmatter block from the document body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("\n---") {
        let frontmatter = rest[..end + 1].to_string();
        let body = rest[end + 4..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}
