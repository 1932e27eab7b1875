use clap::builder::{BoolishValueParser, PossibleValuesParser};
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use transform_d::{Descriptor, OptionSchema, RawOptions};

fn negated(name: &str) -> String {
    format!("no-{}", name)
}

fn option_arg(name: &'static str, schema: &OptionSchema) -> Arg {
    let arg = Arg::new(name).long(name).help(schema.describe());

    match schema {
        OptionSchema::String { .. } => arg.value_name("TEXT").action(ArgAction::Set),
        // `--flag` alone means true; `--flag=false` is also accepted
        OptionSchema::Boolean { .. } => arg
            .value_name("BOOL")
            .action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .value_parser(BoolishValueParser::new())
            .overrides_with(negated(name)),
        OptionSchema::Range { min, max, .. } => arg
            .value_name("N")
            .action(ArgAction::Set)
            .value_parser(clap::value_parser!(i64).range(*min..=*max)),
        OptionSchema::Select { choices, .. } => arg
            .value_name("CHOICE")
            .action(ArgAction::Set)
            .value_parser(PossibleValuesParser::new(choices.to_vec())),
    }
}

/// Builds the argument parser for one transform's option flags.
pub fn option_command(descriptor: &Descriptor) -> Command {
    let mut command = Command::new(descriptor.name.clone())
        .bin_name(format!("transform-d {}", descriptor.name))
        .about(descriptor.title.clone())
        .no_binary_name(true)
        .disable_version_flag(true);

    for (name, schema) in &descriptor.options {
        command = command.arg(option_arg(name, schema));
        if schema.is_boolean() {
            command = command.arg(
                Arg::new(negated(name))
                    .long(negated(name))
                    .help(format!("Set --{} to false", name))
                    .action(ArgAction::SetTrue)
                    .overrides_with(*name),
            );
        }
    }
    command
}

fn given_on_command_line(matches: &ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(ValueSource::CommandLine)
}

/// Turns the tokens following a transform name into raw option values.
///
/// Only options present on the command line are returned, so config
/// defaults beneath them stay in effect. `--help`, unknown flags and values
/// clap rejects come back as the clap error.
pub fn parse_option_flags(
    descriptor: &Descriptor,
    tokens: &[String],
) -> Result<RawOptions, clap::Error> {
    let matches = option_command(descriptor).try_get_matches_from(tokens)?;
    let mut raw = RawOptions::new();

    for (name, schema) in &descriptor.options {
        let value = match schema {
            OptionSchema::Boolean { .. } if given_on_command_line(&matches, &negated(name)) => {
                Some(false.to_string())
            }
            OptionSchema::Boolean { .. } => matches.get_one::<bool>(name).map(bool::to_string),
            OptionSchema::Range { .. } => matches.get_one::<i64>(name).map(i64::to_string),
            OptionSchema::String { .. } | OptionSchema::Select { .. } => {
                matches.get_one::<String>(name).cloned()
            }
        };

        if let Some(value) = value {
            raw.insert(name.to_string(), value);
        }
    }

    Ok(raw)
}
