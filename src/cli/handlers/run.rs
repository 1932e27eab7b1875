use transform_d::error::Error;
use transform_d::{Config, TransformRegistry, dispatch};

use crate::cli::Failure;
use crate::cli::global::GlobalArgs;
use crate::cli::handlers::{read_input, write_output};
use crate::cli::options::parse_option_flags;

/// Runs one transform: `tokens` is the transform name followed by its
/// option flags.
///
/// Flags are parsed before any input is read, so `--help` and flag errors
/// never consume stdin.
pub fn handle(tokens: Vec<String>, global: &GlobalArgs, config: &Config) -> Result<(), Failure> {
    let Some((name, flags)) = tokens.split_first() else {
        return Err(Error::UnrecognizedTransform {
            name: String::new(),
            suggestion: None,
        }
        .into());
    };

    let descriptor = TransformRegistry::global().lookup(name)?;

    // config defaults sit beneath command-line flags
    let mut raw = config.raw_defaults(&descriptor.name);
    raw.extend(parse_option_flags(descriptor, flags)?);

    let settings = &config.settings;
    let max_size = global.max_size.unwrap_or_else(|| settings.max_size());
    let errors_as_output = global.errors_as_output || settings.errors_as_output();
    let trailing_newline = !global.no_newline && settings.trailing_newline();

    let input = read_input(global, max_size)?;
    log::info!("{}: read {} bytes", descriptor.name, input.len());

    let output = match dispatch(descriptor, &input, &raw) {
        Ok(output) => output.into_bytes(),
        Err(Error::Transform { transform, cause }) if errors_as_output => {
            log::info!("{}: writing failure as output", transform);
            cause.to_string().into_bytes()
        }
        Err(e) => return Err(e.into()),
    };

    Ok(write_output(global, &output, trailing_newline)?)
}
