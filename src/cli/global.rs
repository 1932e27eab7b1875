use clap::{ArgAction, Args};
use std::path::PathBuf;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Read input from FILE instead of stdin
    #[arg(short = 'i', long, global = true, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write output to FILE instead of stdout
    #[arg(short = 'o', long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Do not append a newline to the output
    #[arg(short = 'n', long, global = true)]
    pub no_newline: bool,

    /// Write transform failures as the output and exit successfully
    #[arg(long, global = true)]
    pub errors_as_output: bool,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, global = true, value_name = "BYTES")]
    pub max_size: Option<usize>,

    /// Process inputs exceeding --max-size
    #[arg(long, global = true)]
    pub force: bool,

    /// Only report errors
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Additional configuration file, applied last
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<String>,
}

impl GlobalArgs {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        let mut global = GlobalArgs::default();
        assert_eq!(global.log_level(), "warn");
        global.verbose = 2;
        assert_eq!(global.log_level(), "debug");
        global.verbose = 9;
        assert_eq!(global.log_level(), "trace");
        global.quiet = true;
        assert_eq!(global.log_level(), "error");
    }
}
