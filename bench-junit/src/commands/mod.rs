pub(crate) mod common;
pub mod completions;
pub mod convert;
pub mod run;

//
// Constants
//
// Application metadata
pub const APP_NAME: &str = "bench-junit";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
// Commands
pub const RUN: &str = "run";
pub const CONVERT: &str = "convert";
pub const COMPLETIONS: &str = "completions";
// Global arguments
pub const VERBOSE: (&str, char) = ("verbose", 'v');
// Arguments for run, convert
pub const OUTPUT: (&str, char) = ("output", 'o');
pub const OUTPUT_FORMAT: (&str, char) = ("output-format", 'f');
pub const MAX_FAILURE_TEXT: &str = "max-failure-text";
// Arguments for run
pub const PACKAGES: &str = "packages";
pub const LOG_FILE: (&str, char) = ("log-file", 'l');
pub const TEST_ARG: &str = "test-arg";
pub const GO_BINARY: &str = "go";
// Arguments for convert
pub const INPUT: (&str, char) = ("input", 'i');
// Arguments for completions
pub const SHELL: (&str, char) = ("shell", 's');
pub const LOCATION: (&str, char) = ("location", 'l');

pub const STDOUT: &str = "-";

pub const SUCCESS_STATUS_CODE: i32 = 0;
pub const ERROR_STATUS_CODE: i32 = 5;

/// Top level command line with its global arguments, subcommands are added by
/// the caller.
pub fn app() -> clap::Command {
    clap::Command::new(APP_NAME)
        .version(APP_VERSION)
        .about(
            r#"
  Runs Go benchmarks and translates their console output into JUnit XML so CI
  dashboards can show per-benchmark timings, metrics, skips and failures."#,
        )
        .arg(
            clap::Arg::new(VERBOSE.0)
                .long(VERBOSE.0)
                .short(VERBOSE.1)
                .help("Sets the level of verbosity - add v's to increase output")
                .action(clap::ArgAction::Count)
                .global(true),
        )
        .arg_required_else_help(true)
}
