//! Named byte transforms: hashing, RFC 4648 and base-x encodings, character
//! sets, percent-encoding, markup entities, punycode and JSON utilities.
//!
//! Every transform lives in one ordered catalog and is addressed by name:
//!
//! ```
//! use transform_d::{RawOptions, run};
//!
//! let encoded = run("encbase64", b"hello", &RawOptions::new()).unwrap();
//! assert_eq!(encoded, b"aGVsbG8=");
//!
//! let mut options = RawOptions::new();
//! options.insert("shift".into(), "1".into());
//! assert_eq!(run("rot", b"HAL", &options).unwrap(), b"IBM");
//! ```

mod core;
mod encoders;
mod features;

pub mod error;
pub mod prelude;
pub mod transforms;

pub use crate::core::alphabets::{self, BASEX_ALPHABETS};
pub use crate::core::config::{Config, DEFAULT_MAX_SIZE, DefaultValue, EncodingMode, Settings};
pub use crate::core::dictionary::Dictionary;
pub use encoders::algorithms::{DecodeError, find_closest_name};
pub use encoders::{chunked, math};
pub use error::Error;
pub use features::{HashAlgorithm, hash, hash_with_seed};
pub use transforms::{
    Descriptor, OptionSchema, OptionValue, Options, Output, RawOptions, RegistrationError, Transform,
    TransformError, TransformRegistry, TransformSummary, dispatch, run,
};
