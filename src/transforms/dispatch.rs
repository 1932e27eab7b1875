use super::descriptor::Descriptor;
use super::options::{Options, RawOptions};
use super::registry::TransformRegistry;
use super::Output;
use crate::error::Error;

/// Resolves the effective value of every declared option.
///
/// Caller-supplied values are validated against their schema; missing ones
/// take the schema default. Keys the transform does not declare are ignored.
pub fn resolve_options(descriptor: &Descriptor, raw: &RawOptions) -> Result<Options, Error> {
    let mut options = Options::new();

    for (name, schema) in &descriptor.options {
        let value = match raw.get(*name) {
            Some(value) => schema.parse(value).map_err(|reason| Error::InvalidOption {
                transform: descriptor.name.clone(),
                option: name.to_string(),
                value: value.clone(),
                reason,
            })?,
            None => schema.default_value(),
        };
        options.insert(*name, value);
    }

    for key in raw.keys() {
        if descriptor.option(key).is_none() {
            log::debug!("{}: ignoring unknown option '{}'", descriptor.name, key);
        }
    }

    Ok(options)
}

/// Resolves options and invokes the transform exactly once.
pub fn dispatch(descriptor: &Descriptor, input: &[u8], raw: &RawOptions) -> Result<Output, Error> {
    let options = resolve_options(descriptor, raw)?;
    log::debug!(
        "dispatching {} on {} bytes with {:?}",
        descriptor.name,
        input.len(),
        options
    );

    descriptor
        .transform
        .apply(input, &options)
        .map_err(|cause| Error::Transform {
            transform: descriptor.name.clone(),
            cause,
        })
}

/// Looks up `name` in the global registry, dispatches, and returns the
/// output as bytes.
pub fn run(name: &str, input: &[u8], raw: &RawOptions) -> Result<Vec<u8>, Error> {
    let descriptor = TransformRegistry::global().lookup(name)?;
    dispatch(descriptor, input, raw).map(Output::into_bytes)
}
