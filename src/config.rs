//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/jsonlayout/config.toml` or `$XDG_CONFIG_HOME/jsonlayout/config.toml`)
//! 3. Built-in defaults
//!
//! The only encoding option is the context-key list. Both the file value and
//! the CLI value go through [`EncoderConfig::set_context_keys`], so a blank
//! value at a higher layer keeps whatever a lower layer set.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Cli;
use crate::encoder::EncoderConfig;
use crate::error::LayoutError;

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Encoder settings.
    pub encoder: EncoderConfig,
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, LayoutError> {
        let mut config = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);

        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(file_config);
        } else if cli.config.is_some() {
            return Err(LayoutError::Config(format!(
                "config file {} does not exist",
                config_path.display()
            )));
        }

        // CLI overrides
        if let Some(ref keys) = cli.context_keys {
            config.encoder.set_context_keys(keys);
        }

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/jsonlayout/config.toml` or `~/.config/jsonlayout/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("jsonlayout").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("jsonlayout")
                .join("config.toml")
        } else {
            PathBuf::from(".config/jsonlayout/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) {
        match file.context_keys {
            Some(KeyList::Joined(raw)) => self.encoder.set_context_keys(&raw),
            Some(KeyList::Items(items)) => self.encoder.set_context_keys(&items.join(",")),
            None => {}
        }
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    context_keys: Option<KeyList>,
}

/// `context_keys` may be a comma-separated string or an array of strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum KeyList {
    Joined(String),
    Items(Vec<String>),
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, LayoutError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LayoutError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
