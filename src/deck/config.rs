//! Per-deck configuration.
//!
//! Settings come from an optional JSON or YAML file (by default `config.json`
//! in the working directory; `.yml` and `.yaml` files are read as YAML). A
//! missing file means every setting keeps its default.

use deckle_layout::DocumentFormat;
use deckle_traits::{ResourceError, ResourceProvider};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Failed to parse config '{path}': {source}")]
    Yaml {
        path: String,
        source: serde_yaml::Error,
    },

    #[error("Config '{path}' is not valid UTF-8: {source}")]
    Encoding {
        path: String,
        source: std::str::Utf8Error,
    },

    #[error("Config '{path}' must be a mapping of settings")]
    NotAMapping { path: String },

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Pixels per inch, used when converting inches to pixels.
    pub dpi: f64,
    /// Outline color drawn around text boxes while debugging; `"off"` disables it.
    pub text_hint: Option<String>,
    /// Named colors substituted before drawing.
    pub custom_colors: IndexMap<String, String>,
    /// Directory images are resolved against.
    pub img_dir: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            dpi: 300.0,
            text_hint: None,
            custom_colors: IndexMap::new(),
            img_dir: ".".to_string(),
        }
    }
}

const KNOWN_KEYS: [&str; 4] = ["dpi", "text_hint", "custom_colors", "img_dir"];

/// Settings older decks still carry that no longer have any effect.
const IGNORED_KEYS: [&str; 1] = ["progress_bars"];

impl DeckConfig {
    /// Parses `text` as YAML when `path` ends in `.yml` or `.yaml`, as JSON otherwise.
    pub fn parse(path: &str, text: &str) -> Result<Self, ConfigError> {
        match DocumentFormat::from_source(path) {
            DocumentFormat::Yaml => Self::from_yaml(path, text),
            _ => Self::from_json(path, text),
        }
    }

    /// Parses a JSON config document. Unknown settings are logged and ignored.
    pub fn from_json(path: &str, text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;
        Self::from_value(path, value)
    }

    /// Parses a YAML config document. A `null` or `false` document is empty.
    pub fn from_yaml(path: &str, text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_yaml::from_str(text).map_err(|source| ConfigError::Yaml {
            path: path.to_string(),
            source,
        })?;
        match value {
            Value::Bool(false) => Ok(Self::default()),
            value => Self::from_value(path, value),
        }
    }

    fn from_value(path: &str, value: Value) -> Result<Self, ConfigError> {
        match &value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => {
                for key in map.keys() {
                    if IGNORED_KEYS.contains(&key.as_str()) {
                        log::debug!("Ignoring obsolete setting '{}' in config '{}'", key, path);
                    } else if !KNOWN_KEYS.contains(&key.as_str()) {
                        log::warn!("Unknown setting '{}' in config '{}'", key, path);
                    }
                }
            }
            _ => {
                return Err(ConfigError::NotAMapping {
                    path: path.to_string(),
                });
            }
        }
        serde_json::from_value(value).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Loads `path` through `provider`, falling back to defaults when it does not exist.
    pub fn load(provider: &dyn ResourceProvider, path: &str) -> Result<Self, ConfigError> {
        let bytes = match provider.load(path) {
            Ok(bytes) => bytes,
            Err(e) if e.is_not_found() => {
                log::debug!("No config at '{}', using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let text = std::str::from_utf8(&bytes).map_err(|source| ConfigError::Encoding {
            path: path.to_string(),
            source,
        })?;
        let config = Self::parse(path, text)?;
        log::info!("Using config: {}", path);
        Ok(config)
    }

    /// The active text hint color, if any.
    pub fn text_hint(&self) -> Option<&str> {
        self.text_hint
            .as_deref()
            .filter(|hint| !hint.eq_ignore_ascii_case("off"))
    }

    /// Replaces a custom color name with its definition; other colors pass through.
    pub fn resolve_color(&self, color: &str) -> String {
        self.custom_colors
            .get(color)
            .cloned()
            .unwrap_or_else(|| color.to_string())
    }
}
