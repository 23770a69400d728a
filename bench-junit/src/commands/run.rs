use std::process;

use clap::{Arg, ArgAction, ArgMatches};
use log::{error, info};

use crate::command::Command;
use crate::commands::common::{
    file_failure, translate_and_write, with_report_args, ReportOptions,
};
use crate::commands::{GO_BINARY, LOG_FILE, PACKAGES, RUN, TEST_ARG};
use crate::parser::errors::Error;
use crate::parser::Result;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

const DEFAULT_GO_BINARY: &str = "go";

/// Everything a benchmark process wrote, stdout and stderr alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    pub output: Vec<u8>,
    pub success: bool,
}

/// Launches the external benchmark process.
pub trait BenchmarkRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<RunOutput>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GoTestRunner;

impl BenchmarkRunner for GoTestRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<RunOutput> {
        let output = process::Command::new(program)
            .args(args)
            .output()
            .map_err(|e| Error::ProcessError(format!("{program}: {e}")))?;

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);

        Ok(RunOutput {
            output: combined,
            success: output.status.success(),
        })
    }
}

pub struct Run {
    runner: Box<dyn BenchmarkRunner>,
}

#[allow(clippy::new_without_default)]
impl Run {
    pub fn new() -> Self {
        Run::with_runner(Box::new(GoTestRunner))
    }

    pub fn with_runner(runner: Box<dyn BenchmarkRunner>) -> Self {
        Run { runner }
    }
}

/// Arguments handed to `go`: benchmarks only, verbose so skips and failures
/// are reported, then any extra flags and finally the packages.
pub(crate) fn go_test_args(extra: &[String], packages: &[String]) -> Vec<String> {
    ["test", "-v", "-run=^$", "-bench=."]
        .iter()
        .map(|arg| arg.to_string())
        .chain(extra.iter().cloned())
        .chain(packages.iter().cloned())
        .collect()
}

fn strings(args: &ArgMatches, id: &str) -> Vec<String> {
    args.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

impl Command for Run {
    fn name(&self) -> &'static str {
        RUN
    }

    fn command(&self) -> clap::Command {
        let command = clap::Command::new(RUN)
            .about(r#"Runs "go test -v -run=^$ -bench=. <packages>" and translates the output into JUnit XML."#)
            .arg(
                Arg::new(PACKAGES)
                    .help("Go packages to benchmark")
                    .action(ArgAction::Append)
                    .num_args(1..)
                    .required(true),
            )
            .arg(
                Arg::new(LOG_FILE.0)
                    .long(LOG_FILE.0)
                    .short(LOG_FILE.1)
                    .help("Optional output file for the complete go test output")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new(TEST_ARG)
                    .long(TEST_ARG)
                    .help("Additional args for go test, may be repeated or comma separated")
                    .action(ArgAction::Append)
                    .value_delimiter(',')
                    .allow_hyphen_values(true),
            )
            .arg(
                Arg::new(GO_BINARY)
                    .long(GO_BINARY)
                    .help("The go executable to run")
                    .action(ArgAction::Set)
                    .default_value(DEFAULT_GO_BINARY),
            )
            .arg_required_else_help(true);

        with_report_args(command)
    }

    fn execute(&self, args: &ArgMatches, writer: &mut Writer, _: &mut Reader) -> Result<i32> {
        let options = ReportOptions::from_args(args)?;
        let program = args
            .get_one::<String>(GO_BINARY)
            .map_or(DEFAULT_GO_BINARY, |s| s.as_str());
        let test_args = go_test_args(&strings(args, TEST_ARG), &strings(args, PACKAGES));

        info!("Running command {:?} {:?}...", program, test_args);
        let run = self.runner.run(program, &test_args)?;
        if !run.success {
            error!("Error(s) executing benchmarks.");
        }

        if let Some(log_file) = args.get_one::<String>(LOG_FILE.0) {
            if let Err(e) = std::fs::write(log_file, &run.output) {
                return file_failure(writer, &format!("Unable to write log file `{log_file}`"), e);
            }
        }

        info!("Benchmarks completed. Generating report...");
        let raw = String::from_utf8_lossy(&run.output);
        translate_and_write(&raw, &options, writer)
    }
}
