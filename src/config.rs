use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use prompt2json_core::Metadata;

use crate::cli::args::Args;
use crate::converter::DEFAULT_INDENT;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Prompt2JsonConfig {
    #[serde(default)]
    pub output: OutputConfig,

    /// Extra metadata attached to every record
    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_indent")]
    pub indent: usize,

    #[serde(default = "default_include_metadata")]
    pub include_metadata: bool,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

fn default_include_metadata() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            include_metadata: default_include_metadata(),
        }
    }
}

/// One config file as written on disk. Unset fields leave lower layers alone.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ConfigLayer {
    #[serde(default)]
    pub output: OutputLayer,

    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OutputLayer {
    pub indent: Option<usize>,
    pub include_metadata: Option<bool>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

impl Prompt2JsonConfig {
    /// Apply a config file on top of this one. Every field the file sets wins.
    pub fn merge(&mut self, layer: &ConfigLayer) {
        if let Some(indent) = layer.output.indent {
            self.output.indent = indent;
        }
        if let Some(include_metadata) = layer.output.include_metadata {
            self.output.include_metadata = include_metadata;
        }

        for (key, value) in &layer.metadata {
            self.metadata.insert(key.clone(), value.clone());
        }
    }

    pub fn generate_default_config() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let layer: ConfigLayer = toml::from_str(&content)?;
        Ok(layer)
    }

    /// Get the user config file path (~/.config/prompt2json/config.toml)
    pub fn get_user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config/prompt2json/config.toml"))
    }

    /// Get the current directory config file path (./prompt2json.toml)
    pub fn get_current_config_path() -> PathBuf {
        PathBuf::from("./prompt2json.toml")
    }

    /// Load and merge configs from all sources with priority:
    /// 1. User config (~/.config/prompt2json/config.toml) - lowest priority
    /// 2. Current directory (./prompt2json.toml)
    pub fn load_with_merged_configs() -> Self {
        let mut config = Self::default();

        let candidates = Self::get_user_config_path()
            .into_iter()
            .chain(std::iter::once(Self::get_current_config_path()));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(layer) => {
                    config.merge(&layer);
                    log::debug!("Loaded config from: {}", path.display());
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                }
            }
        }

        config
    }

    pub fn apply_env_vars(&mut self, env_vars: &HashMap<String, String>) -> Result<(), ConfigError> {
        for (key, value) in env_vars {
            if let Some(config_key) = key.strip_prefix("PROMPT2JSON_") {
                match config_key {
                    "OUTPUT_INDENT" => {
                        self.output.indent = value.parse().map_err(|_| ConfigError::InvalidValue {
                            field: key.clone(),
                            value: value.clone(),
                        })?;
                    }
                    "OUTPUT_INCLUDE_METADATA" => {
                        self.output.include_metadata =
                            value.parse().map_err(|_| ConfigError::InvalidValue {
                                field: key.clone(),
                                value: value.clone(),
                            })?;
                    }
                    _ => {} // Ignore unknown environment variables
                }
            }
        }
        Ok(())
    }

    pub fn apply_cli_args(&mut self, args: &Args) {
        if let Some(indent) = args.indent {
            self.output.indent = indent;
        }

        if args.no_metadata {
            self.output.include_metadata = false;
        }

        for (key, value) in &args.meta {
            self.metadata.insert(key.clone(), value.clone());
        }
    }

    /// Load configuration with full precedence chain:
    /// 1. Default values (lowest)
    /// 2. User config (~/.config/prompt2json/config.toml)
    /// 3. Current directory (./prompt2json.toml)
    /// 4. Explicit config file (--config)
    /// 5. Environment variables (PROMPT2JSON_*)
    /// 6. CLI arguments (highest)
    pub fn load_with_precedence(
        args: &Args,
        env_vars: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::load_with_merged_configs();

        if let Some(path) = &args.config {
            let layer = Self::load_from_file(path)?;
            config.merge(&layer);
            log::debug!("Loaded explicit config from: {}", path.display());
        }

        config.apply_env_vars(env_vars)?;
        config.apply_cli_args(args);

        Ok(config)
    }
}
