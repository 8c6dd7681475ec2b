use crate::config::ConfigOverrides;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load options from a TOML settings file.
///
/// An explicit `path` must exist and parse. Without one, the default location is tried
/// and silently skipped when absent.
pub fn load(path: Option<&Path>) -> Result<ConfigOverrides> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (config_path(), false),
    };

    if !required && !path.exists() {
        debug!(path = %path.display(), "no settings file");
        return Ok(ConfigOverrides::default());
    }

    let content = fs::read_to_string(&path).map_err(|source| Error::Read { path: path.clone(), source })?;
    let overrides = parse(&content).map_err(|source| Error::Settings { path: path.clone(), source })?;
    debug!(path = %path.display(), ?overrides, "loaded settings");
    Ok(overrides)
}

pub fn parse(content: &str) -> std::result::Result<ConfigOverrides, toml::de::Error> {
    toml::from_str(content)
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gridlife")
        .join("config.toml")
}
