//! `regform init`: write the default configuration.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use regform::config::Config;
use regform::paths::CONFIG_FILE;

pub fn cmd_init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let document = Config::default().to_document()?;
    fs::write(&path, document).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} {}", "Created".green(), path.display());
    Ok(())
}
