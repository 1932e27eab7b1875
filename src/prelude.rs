//! Convenient re-exports for common usage.
//!
//! ```
//! use transform_d::prelude::*;
//!
//! let registry = TransformRegistry::global();
//! let descriptor = registry.lookup("sha256").unwrap();
//! let digest = dispatch(descriptor, b"abc", &RawOptions::new()).unwrap();
//! assert!(digest.as_bytes().starts_with(b"ba7816bf"));
//! ```

pub use crate::{
    Config, Descriptor, Error, OptionSchema, Options, Output, RawOptions, Transform,
    TransformError, TransformRegistry, dispatch, run,
};
