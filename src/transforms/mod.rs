//! Transform registry and dispatch.
//!
//! Every catalog entry is a [`Descriptor`]: a name, a display title and
//! group, an option schema and a [`Transform`] implementation. The
//! [`TransformRegistry`] owns the catalog and [`dispatch`] resolves options
//! and runs a transform exactly once.

mod catalog;
pub mod descriptor;
pub mod dispatch;
pub mod options;
pub mod registry;

use thiserror::Error;

use crate::encoders::algorithms::DecodeError;

pub use descriptor::Descriptor;
pub use dispatch::{dispatch, run};
pub use options::{OptionSchema, OptionValue, Options, RawOptions};
pub use registry::{RegistrationError, TransformRegistry, TransformSummary};

/// The result of a transform: raw bytes or text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Bytes(Vec<u8>),
    Text(String),
}

impl Output {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Output::Bytes(b) => b,
            Output::Text(s) => s.as_bytes(),
        }
    }

    /// Text is handed out as its UTF-8 encoding.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Output::Bytes(b) => b,
            Output::Text(s) => s.into_bytes(),
        }
    }
}

impl From<Vec<u8>> for Output {
    fn from(bytes: Vec<u8>) -> Self {
        Output::Bytes(bytes)
    }
}

impl From<String> for Output {
    fn from(text: String) -> Self {
        Output::Text(text)
    }
}

/// Failures raised by a transform's own logic.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid JSON path: {0}")]
    JsonPath(String),

    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid Data URI: missing ',' separator")]
    InvalidDataUri,

    #[error("URI malformed")]
    MalformedUri,

    #[error("invalid punycode input")]
    Punycode,

    #[error("option '{0}' was not resolved")]
    MissingOption(String),

    #[error("option '{option}' is not a {expected}")]
    OptionType {
        option: String,
        expected: &'static str,
    },
}

/// One catalog operation: a pure function of its input and options.
///
/// Implementations must be deterministic and must not keep state between
/// calls; the registry hands out shared references across threads.
pub trait Transform: Send + Sync {
    fn apply(&self, input: &[u8], options: &Options) -> Result<Output, TransformError>;
}

impl<F> Transform for F
where
    F: Fn(&[u8], &Options) -> Result<Output, TransformError> + Send + Sync,
{
    fn apply(&self, input: &[u8], options: &Options) -> Result<Output, TransformError> {
        self(input, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_into_bytes() {
        assert_eq!(Output::Text("héllo".into()).into_bytes(), "héllo".as_bytes());
        assert_eq!(Output::Bytes(vec![0, 255]).into_bytes(), vec![0, 255]);
    }

    #[test]
    fn test_closure_is_transform() {
        let upper = |input: &[u8], _: &Options| -> Result<Output, TransformError> {
            Ok(Output::Bytes(input.to_ascii_uppercase()))
        };
        let out = upper.apply(b"abc", &Options::default()).unwrap();
        assert_eq!(out.as_bytes(), b"ABC");
    }
}
