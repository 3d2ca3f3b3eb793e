//! Command module structure for regform CLI

use anyhow::Result;
use std::path::Path;

use regform::config::Config;

pub mod check;
pub mod format;
pub mod init;
pub mod register;
pub mod replay;

/// Load the config from an explicit path, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
