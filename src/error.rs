use thiserror::Error;

use crate::transforms::TransformError;

/// Errors surfaced by registry lookup, option resolution and dispatch.
#[derive(Debug, Error)]
pub enum Error {
    /// No transform is registered under the requested name
    #[error("unrecognized transform '{name}'")]
    UnrecognizedTransform {
        name: String,
        suggestion: Option<String>,
    },

    /// A supplied option value violates its schema
    #[error("invalid value '{value}' for option '{option}' of '{transform}': {reason}")]
    InvalidOption {
        transform: String,
        option: String,
        value: String,
        reason: String,
    },

    /// The transform could not process its input
    #[error("{transform}: {cause}")]
    Transform {
        transform: String,
        #[source]
        cause: TransformError,
    },

    /// A configuration file could not be read or parsed
    #[error("config {path}: {message}")]
    Config { path: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// `1` transform failure, `2` usage, `3` configuration, `4` I/O.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Transform { .. } => 1,
            Error::UnrecognizedTransform { .. } | Error::InvalidOption { .. } => 2,
            Error::Config { .. } => 3,
            Error::Io(_) => 4,
        }
    }

    /// Follow-up hint for the user, if there is one.
    pub fn hint(&self) -> Option<String> {
        match self {
            Error::UnrecognizedTransform { suggestion, .. } => Some(match suggestion {
                Some(s) => format!("did you mean '{}'? run `transform-d show` to list all transforms", s),
                None => "run `transform-d show` to list all transforms".to_string(),
            }),
            Error::InvalidOption { transform, .. } => Some(format!(
                "run `transform-d describe {}` to see its options",
                transform
            )),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
