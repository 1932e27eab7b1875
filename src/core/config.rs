use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::Error;
use crate::transforms::RawOptions;

/// Strategy a dictionary uses to turn bytes into characters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EncodingMode {
    /// True radix conversion treating data as one big number.
    /// Works with any dictionary size; leading zero bytes are kept.
    #[default]
    Radix,
    /// Fixed-size bit chunking per RFC 4648.
    /// Requires power-of-two dictionary size. Supports padding.
    Chunked,
}

/// Default maximum input size: 100 MiB.
pub const DEFAULT_MAX_SIZE: usize = 100 * 1024 * 1024;

/// Global settings. Every field is optional so that later config layers
/// only override what they actually set.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Append a newline after the output (default: true)
    #[serde(default)]
    pub trailing_newline: Option<bool>,
    /// Write transform failures as the output payload instead of failing
    #[serde(default)]
    pub errors_as_output: Option<bool>,
    /// Maximum input size in bytes, 0 = unlimited
    #[serde(default)]
    pub max_size: Option<usize>,
}

impl Settings {
    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline.unwrap_or(true)
    }

    pub fn errors_as_output(&self) -> bool {
        self.errors_as_output.unwrap_or(false)
    }

    pub fn max_size(&self) -> usize {
        self.max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }
}

/// A scalar option default as written in TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl DefaultValue {
    /// The value in the same textual form a command-line flag would carry.
    pub fn as_raw(&self) -> String {
        match self {
            DefaultValue::Bool(b) => b.to_string(),
            DefaultValue::Int(i) => i.to_string(),
            DefaultValue::Str(s) => s.clone(),
        }
    }
}

/// Tool configuration loaded from TOML.
///
/// ```toml
/// [settings]
/// trailing_newline = true
///
/// [defaults.rot]
/// shift = 5
/// ```
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    /// Per-transform option defaults, applied beneath command-line flags
    #[serde(default)]
    pub defaults: HashMap<String, HashMap<String, DefaultValue>>,
}

impl Config {
    /// Parses a configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads configuration from a file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|e| Error::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Merges another configuration into this one.
    ///
    /// Settings and option defaults from `other` win over those in `self`.
    pub fn merge(&mut self, other: Config) {
        if other.settings.trailing_newline.is_some() {
            self.settings.trailing_newline = other.settings.trailing_newline;
        }
        if other.settings.errors_as_output.is_some() {
            self.settings.errors_as_output = other.settings.errors_as_output;
        }
        if other.settings.max_size.is_some() {
            self.settings.max_size = other.settings.max_size;
        }

        for (transform, options) in other.defaults {
            self.defaults.entry(transform).or_default().extend(options);
        }
    }

    /// Raw option defaults configured for one transform.
    pub fn raw_defaults(&self, transform: &str) -> RawOptions {
        self.defaults
            .get(transform)
            .map(|options| {
                options
                    .iter()
                    .map(|(name, value)| (name.clone(), value.as_raw()))
                    .collect()
            })
            .unwrap_or_default()
    }
}
