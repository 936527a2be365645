use std::collections::HashSet;
use std::path::{Path, PathBuf};

use dropdown_core::{DropdownOption, Label, LabelSegment, OptionSet, SegmentStyle};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::platform;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not encode config: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("dropdown {name:?}: {reason}")]
    Invalid { name: String, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default = "default_dropdowns")]
    pub dropdowns: Vec<DropdownConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Tallest the option panel may grow before it scrolls.
    #[serde(default = "default_max_rows")]
    pub max_rows: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` wins when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownConfig {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Columns for the control and its panel; fits the widest option if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
    /// Free-form tag carried into the dropdown's log events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default)]
    pub options: Vec<OptionConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionConfig {
    pub value: String,
    pub label: Label,
}

impl DropdownConfig {
    pub fn option_set(&self) -> OptionSet<String> {
        self.options
            .iter()
            .map(|o| DropdownOption::new(o.label.clone(), o.value.clone()))
            .collect()
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            max_rows: default_max_rows(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_max_rows() -> u16 {
    12
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn option(label: &str, value: &str) -> OptionConfig {
    OptionConfig {
        label: Label::from(label),
        value: value.to_string(),
    }
}

fn default_dropdowns() -> Vec<DropdownConfig> {
    vec![
        DropdownConfig {
            name: "sort".to_string(),
            value: "name".to_string(),
            prefix: Some("sort: ".to_string()),
            suffix: None,
            width: Some(24),
            class: Some("sorting".to_string()),
            options: vec![
                option("Name", "name"),
                option("Date modified", "modified"),
                option("Date created", "created"),
                option("Size", "size"),
                option("Kind", "kind"),
            ],
        },
        DropdownConfig {
            name: "order".to_string(),
            value: "asc".to_string(),
            prefix: None,
            suffix: None,
            width: Some(24),
            class: Some("sorting".to_string()),
            options: vec![option("Ascending", "asc"), option("Descending", "desc")],
        },
        DropdownConfig {
            name: "density".to_string(),
            value: "comfortable".to_string(),
            prefix: None,
            suffix: Some(" ▾".to_string()),
            width: None,
            class: None,
            options: vec![
                option("Compact", "compact"),
                option("Comfortable", "comfortable"),
                OptionConfig {
                    label: Label::Rich(vec![
                        LabelSegment::new("Spacious ", SegmentStyle::Plain),
                        LabelSegment::new("(large screens)", SegmentStyle::Muted),
                    ]),
                    value: "spacious".to_string(),
                },
            ],
        },
    ]
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Read `path`, writing the defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(io_err)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }

    /// Reject definitions the controller could not tell apart.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        for dd in &self.dropdowns {
            let invalid = |reason: String| ConfigError::Invalid {
                name: dd.name.clone(),
                reason,
            };
            if dd.name.trim().is_empty() {
                return Err(invalid("name is blank".to_string()));
            }
            if !names.insert(dd.name.as_str()) {
                return Err(invalid("name is used twice".to_string()));
            }
            let mut values = HashSet::new();
            for o in &dd.options {
                if !values.insert(o.value.as_str()) {
                    return Err(invalid(format!("option value {:?} is used twice", o.value)));
                }
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            panel: PanelConfig::default(),
            logging: LoggingConfig::default(),
            dropdowns: default_dropdowns(),
        }
    }
}
