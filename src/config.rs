use crate::error::{Result, ZkError};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "ZETTELKASTEN_CONFIG";
pub const ROOT_ENV: &str = "ZETTELKASTEN";
pub const CONFIG_DIR_NAME: &str = "zettelkasten-cli";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Bundled starter config written by `zk config`.
pub const DEFAULT_CONFIG: &str = include_str!("../contrib/config.toml");

/// config.toml schema. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub notes: NotesConfig,
    pub periodic: PeriodicConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub root: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { root: "~/zettelkasten".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    pub inbox: String,
    pub template_dir: String,
    pub default_template: String,
    pub max_title_length: usize,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            inbox: "inbox".to_string(),
            template_dir: "meta/templates".to_string(),
            default_template: "note-template.md".to_string(),
            max_title_length: 80,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PeriodicConfig {
    pub daily_dir: String,
    pub weekly_dir: String,
    pub daily_template: String,
    pub weekly_template: String,
}

impl Default for PeriodicConfig {
    fn default() -> Self {
        Self {
            daily_dir: "periodic-notes/daily".to_string(),
            weekly_dir: "periodic-notes/weekly".to_string(),
            daily_template: "meta/templates/daily.md".to_string(),
            weekly_template: "meta/templates/weekly.md".to_string(),
        }
    }
}

impl Config {
    /// Load from the resolved config location, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        debug!("loading config from {}", path.display());
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw).map_err(|source| ZkError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Zettelkasten root: `$ZETTELKASTEN` when set, otherwise `general.root`.
    pub fn root(&self) -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(ROOT_ENV) {
            if !dir.trim().is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }
        expand_tilde(&self.general.root)
    }
}

/// `$ZETTELKASTEN_CONFIG`, else `<config dir>/zettelkasten-cli/config.toml`
/// with the config dir taken from `$XDG_CONFIG_HOME` or the platform default.
pub fn config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or(ZkError::NoHome)?;
    Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Write the bundled config to `path`. Refuses to clobber an existing file
/// unless `force` is set.
pub fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ZkError::ConfigExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(value: &str) -> Result<PathBuf> {
    if value == "~" {
        return dirs::home_dir().ok_or(ZkError::NoHome);
    }
    match value.strip_prefix("~/") {
        Some(rest) => Ok(dirs::home_dir().ok_or(ZkError::NoHome)?.join(rest)),
        None => Ok(PathBuf::from(value)),
    }
}
