//! Global configuration for wayfind (stored in ~/.config/wayfind/config.toml)

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfindError};
use crate::search::Strategy;
use crate::{bail_invalid, bail_usage};

const CONFIG_DIR: &str = "wayfind";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "WAYFIND_CONFIG_DIR";

/// Keys accepted by `set` and `unset`
pub const CONFIG_KEYS: [&str; 3] = ["default-strategy", "show-trace", "graph"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Strategy used when `search` is given none (name or menu index)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_strategy: Option<String>,

    /// Print frontier snapshots after each result
    #[serde(default = "default_show_trace")]
    pub show_trace: bool,

    /// Problem file used when `--graph` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<PathBuf>,
}

fn default_show_trace() -> bool {
    true
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_strategy: None,
            show_trace: default_show_trace(),
            graph: None,
        }
    }
}

impl GlobalConfig {
    /// Location of the config file (it need not exist)
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    WayfindError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            WayfindError::Other(format!(
                "failed to read global config from {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::parse(&content).map_err(|e| {
            WayfindError::Other(format!(
                "failed to parse global config from {}: {}",
                path.display(),
                e
            ))
        })
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let config_dir = path
            .parent()
            .ok_or_else(|| WayfindError::Other("invalid config path".to_string()))?;

        fs::create_dir_all(config_dir).map_err(|e| {
            WayfindError::Other(format!(
                "failed to create config directory {}: {}",
                config_dir.display(),
                e
            ))
        })?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| WayfindError::Other(format!("failed to serialize config: {}", e)))?;

        fs::write(&path, content).map_err(|e| {
            WayfindError::Other(format!(
                "failed to write config to {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Update one setting from its command-line spelling
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-strategy" => {
                let strategy: Strategy = value.parse()?;
                self.default_strategy = Some(strategy.short_name().to_string());
            }
            "show-trace" => {
                self.show_trace = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => bail_invalid!("show-trace value", value),
                };
            }
            "graph" => {
                if value.trim().is_empty() {
                    bail_invalid!("graph path", "(empty)");
                }
                self.graph = Some(PathBuf::from(value));
            }
            _ => bail_usage!(unknown_key(key)),
        }
        Ok(())
    }

    /// Restore one setting to its default
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "default-strategy" => self.default_strategy = None,
            "show-trace" => self.show_trace = default_show_trace(),
            "graph" => self.graph = None,
            _ => bail_usage!(unknown_key(key)),
        }
        Ok(())
    }

    /// The configured default strategy, validated
    pub fn default_strategy(&self) -> Result<Option<Strategy>> {
        self.default_strategy
            .as_deref()
            .map(str::parse::<Strategy>)
            .transpose()
    }
}

fn unknown_key(key: &str) -> String {
    format!(
        "unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    )
}
