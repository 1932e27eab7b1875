use clap::{Args, Parser, Subcommand};

use super::global::GlobalArgs;

#[derive(Parser, Debug)]
#[command(name = "transform-d")]
#[command(version)]
#[command(
    about = "Apply named encoding, decoding, hashing and formatting transforms to stdin",
    long_about = None
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "Run `transform-d show` to list every transform.")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the transform catalog
    Show(ShowArgs),

    /// Show a transform's title, group, aliases and options
    Describe(DescribeArgs),

    /// <TRANSFORM> [--option value | --option=value | --flag | --no-flag]...
    #[command(external_subcommand)]
    Run(Vec<String>),
}

/// Arguments for listing the catalog
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Only list transforms in this group
    #[arg(long, value_name = "GROUP")]
    pub group: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for describing one transform
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Transform name or alias
    pub transform: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
