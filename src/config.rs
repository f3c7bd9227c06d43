//!
//! This module defines the `inkmd.toml` configuration structure, its discovery and
//! loading logic, and the JSON schema generated from it.

use crate::renderer::RenderOptions;
use crate::theme::Theme;
use crate::types::HeadingLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Config file names searched in each directory, in order of precedence
pub const CONFIG_FILES: &[&str] = &[".inkmd.toml", "inkmd.toml", ".config/inkmd.toml"];

/// Keys that are valid but absent from a serialized default config
const OPTIONAL_KEYS: &[&str] = &["glyph"];

/// Normalizes configuration keys to lowercase kebab-case.
pub fn normalize_key(key: &str) -> String {
    key.replace('_', "-").to_ascii_lowercase()
}

/// Rendering options that are not about presentation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, schemars::JsonSchema)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderConfig {
    /// Level a single `#` heading is styled as (1-6, out-of-range values are clamped)
    #[serde(alias = "base_level")]
    pub base_level: HeadingLevel,
}

/// Represents the complete configuration loaded from inkmd.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq, schemars::JsonSchema)]
#[schemars(description = "inkmd configuration: heading base level and the CSS classes used for every rendered element.")]
pub struct Config {
    /// Rendering options
    #[serde(default)]
    pub render: RenderConfig,

    /// CSS classes and heading glyphs. Omitted fields keep their defaults.
    #[serde(default)]
    pub theme: Theme,
}

impl Config {
    /// Options to hand to the renderer
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            base_level: self.render.base_level,
            theme: self.theme.clone(),
        }
    }

    /// Parse configuration from TOML text. `origin` is only used in messages.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("{origin}: {e}")))?;

        for key in unknown_keys(&table) {
            log::warn!("Unknown configuration key in {origin}: {key}");
        }

        toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("{origin}: {e}")))
    }

    /// Load configuration from a specific file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: path.display().to_string(),
        })?;
        log::debug!("[inkmd-config] Loading config file: {}", path.display());
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Serialize as a TOML document suitable for an `inkmd.toml`
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in default configuration
    Default,
    /// Discovered .inkmd.toml, inkmd.toml or .config/inkmd.toml
    ProjectConfig(PathBuf),
    /// File passed with --config
    Explicit(PathBuf),
}

/// A configuration together with its origin
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

impl LoadedConfig {
    /// Load configuration.
    ///
    /// An explicit `config_path` always wins. Otherwise, unless `isolated` is set,
    /// the directory tree is searched upward from `start_dir` (or the current
    /// directory) and the first config file found is used.
    pub fn load_with_discovery(
        config_path: Option<&str>,
        start_dir: Option<&Path>,
        isolated: bool,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            let path = PathBuf::from(path);
            let config = Config::load_from_path(&path)?;
            return Ok(Self {
                config,
                source: ConfigSource::Explicit(path),
            });
        }

        if isolated {
            return Ok(Self::default());
        }

        let start = match start_dir {
            Some(dir) => dir.to_path_buf(),
            None => match std::env::current_dir() {
                Ok(dir) => dir,
                Err(e) => {
                    log::debug!("[inkmd-config] Failed to get current directory: {e}");
                    return Ok(Self::default());
                }
            },
        };

        match discover_config_upward(&start) {
            Some(path) => {
                let config = Config::load_from_path(&path)?;
                Ok(Self {
                    config,
                    source: ConfigSource::ProjectConfig(path),
                })
            }
            None => Ok(Self::default()),
        }
    }
}

impl Default for LoadedConfig {
    fn default() -> Self {
        Self {
            config: Config::default(),
            source: ConfigSource::Default,
        }
    }
}

/// Find the nearest config file by walking up from `start_dir`.
///
/// The search stops at a directory containing `.git`, at the filesystem root,
/// or after a fixed number of levels.
pub fn discover_config_upward(start_dir: &Path) -> Option<PathBuf> {
    const MAX_DEPTH: usize = 100;

    let mut current_dir = start_dir.to_path_buf();
    for _ in 0..MAX_DEPTH {
        log::debug!("[inkmd-config] Searching for config in: {}", current_dir.display());

        for config_name in CONFIG_FILES {
            let config_path = current_dir.join(config_name);
            if config_path.is_file() {
                log::debug!("[inkmd-config] Found config file: {}", config_path.display());
                return Some(config_path);
            }
        }

        if current_dir.join(".git").exists() {
            log::debug!("[inkmd-config] Stopping at .git directory");
            return None;
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                log::debug!("[inkmd-config] Reached filesystem root");
                return None;
            }
        }
    }

    log::debug!("[inkmd-config] Maximum traversal depth reached");
    None
}

/// Write a default configuration file, refusing to overwrite unless `force` is set.
pub fn create_default_config(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::FileExists {
            path: path.display().to_string(),
        });
    }

    let content = format!(
        "# inkmd configuration\n# Every key is optional; omitted keys use the built-in defaults.\n\n{}",
        Config::default().to_toml_string()?
    );

    fs::write(path, content).map_err(|source| ConfigError::IoError {
        source,
        path: path.display().to_string(),
    })
}

/// JSON schema of the configuration file
pub fn json_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(Config);
    serde_json::to_value(&schema).unwrap_or(serde_json::Value::Null)
}

/// Dotted paths of keys in `table` that the configuration does not know about
fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let known = match toml::Value::try_from(Config::default()) {
        Ok(toml::Value::Table(known)) => known,
        _ => return Vec::new(),
    };
    let mut unknown = Vec::new();
    collect_unknown(table, &known, "", &mut unknown);
    unknown
}

fn collect_unknown(table: &toml::Table, known: &toml::Table, prefix: &str, unknown: &mut Vec<String>) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        let normalized = normalize_key(key);

        match known.get(key).or_else(|| known.get(&normalized)) {
            Some(toml::Value::Table(known_child)) => {
                if let toml::Value::Table(child) = value {
                    collect_unknown(child, known_child, &path, unknown);
                }
            }
            Some(_) => {}
            None if OPTIONAL_KEYS.contains(&normalized.as_str()) => {}
            None => unknown.push(path),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write the configuration file
    #[error("Failed to access config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// Configuration file already exists
    #[error("Configuration file already exists at {path}")]
    FileExists { path: String },
}
