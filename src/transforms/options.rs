use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::TransformError;

/// Option values as supplied by a caller, before validation: option name to
/// the textual value (a command-line flag or a config default).
pub type RawOptions = BTreeMap<String, String>;

/// Declared shape of one configurable transform parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OptionSchema {
    /// Free-form text
    String { default: &'static str },
    /// `true` / `false`
    Boolean { default: bool },
    /// Integer within inclusive bounds
    Range { min: i64, max: i64, default: i64 },
    /// One value out of a fixed set
    Select {
        choices: &'static [&'static str],
        default: &'static str,
    },
}

impl OptionSchema {
    pub fn is_boolean(&self) -> bool {
        matches!(self, OptionSchema::Boolean { .. })
    }

    /// Value used when the caller supplies none.
    pub fn default_value(&self) -> OptionValue {
        match self {
            OptionSchema::String { default } => OptionValue::Str(default.to_string()),
            OptionSchema::Boolean { default } => OptionValue::Bool(*default),
            OptionSchema::Range { default, .. } => OptionValue::Int(*default),
            OptionSchema::Select { default, .. } => OptionValue::Str(default.to_string()),
        }
    }

    /// Parses and validates a raw value. The error is a human-readable reason.
    ///
    /// Out-of-range and unlisted values are rejected, never clamped.
    pub fn parse(&self, raw: &str) -> Result<OptionValue, String> {
        match self {
            OptionSchema::String { .. } => Ok(OptionValue::Str(raw.to_string())),
            OptionSchema::Boolean { .. } => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(OptionValue::Bool(true)),
                "false" | "0" | "no" | "off" => Ok(OptionValue::Bool(false)),
                _ => Err("expected true or false".to_string()),
            },
            OptionSchema::Range { min, max, .. } => {
                let value: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| "expected an integer".to_string())?;
                if value < *min || value > *max {
                    return Err(format!("must be between {} and {}", min, max));
                }
                Ok(OptionValue::Int(value))
            }
            OptionSchema::Select { choices, .. } => {
                if choices.iter().any(|c| *c == raw) {
                    Ok(OptionValue::Str(raw.to_string()))
                } else {
                    Err(format!("must be one of: {}", choices.join(", ")))
                }
            }
        }
    }

    /// Short description of accepted values, for listings.
    pub fn describe(&self) -> String {
        match self {
            OptionSchema::String { default } => format!("string (default: \"{}\")", default),
            OptionSchema::Boolean { default } => format!("boolean (default: {})", default),
            OptionSchema::Range { min, max, default } => {
                format!("range {}..={} (default: {})", min, max, default)
            }
            OptionSchema::Select { choices, default } => {
                format!("one of {} (default: {})", choices.join("|"), default)
            }
        }
    }
}

/// A validated option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Str(String),
    Bool(bool),
    Int(i64),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Str(s) => write!(f, "{}", s),
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Int(i) => write!(f, "{}", i),
        }
    }
}

/// Resolved options handed to a transform: exactly one value per declared
/// option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    values: BTreeMap<String, OptionValue>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: OptionValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn require(&self, name: &str) -> Result<&OptionValue, TransformError> {
        self.values
            .get(name)
            .ok_or_else(|| TransformError::MissingOption(name.to_string()))
    }

    pub fn str(&self, name: &str) -> Result<&str, TransformError> {
        match self.require(name)? {
            OptionValue::Str(s) => Ok(s),
            _ => Err(TransformError::OptionType {
                option: name.to_string(),
                expected: "string",
            }),
        }
    }

    pub fn bool(&self, name: &str) -> Result<bool, TransformError> {
        match self.require(name)? {
            OptionValue::Bool(b) => Ok(*b),
            _ => Err(TransformError::OptionType {
                option: name.to_string(),
                expected: "boolean",
            }),
        }
    }

    pub fn int(&self, name: &str) -> Result<i64, TransformError> {
        match self.require(name)? {
            OptionValue::Int(i) => Ok(*i),
            _ => Err(TransformError::OptionType {
                option: name.to_string(),
                expected: "integer",
            }),
        }
    }
}
