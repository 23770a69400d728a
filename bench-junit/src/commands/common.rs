use std::convert::TryFrom;
use std::fs::File;

use clap::{Arg, ArgAction, ArgMatches};
use log::{error, info};

use crate::commands::{
    ERROR_STATUS_CODE, MAX_FAILURE_TEXT, OUTPUT, OUTPUT_FORMAT, STDOUT, SUCCESS_STATUS_CODE,
};
use crate::parser::errors::Error;
use crate::parser::{self, ParseOptions, Result, DEFAULT_FAILURE_TEXT_LIMIT};
use crate::report::OutputFormatType;
use crate::utils::writer::Writer;

/// Arguments every command producing a report understands.
pub(crate) fn with_report_args(command: clap::Command) -> clap::Command {
    command
        .arg(
            Arg::new(OUTPUT.0)
                .long(OUTPUT.0)
                .short(OUTPUT.1)
                .help("Write the report to this file, `-` writes to stdout")
                .action(ArgAction::Set)
                .default_value(STDOUT),
        )
        .arg(
            Arg::new(OUTPUT_FORMAT.0)
                .long(OUTPUT_FORMAT.0)
                .short(OUTPUT_FORMAT.1)
                .help("Format of the generated report")
                .action(ArgAction::Set)
                .value_parser(OutputFormatType::VARIANTS)
                .default_value("junit"),
        )
        .arg(
            Arg::new(MAX_FAILURE_TEXT)
                .long(MAX_FAILURE_TEXT)
                .help("Maximum number of characters of log output kept for each failed benchmark [default: 1000]")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize)),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportOptions {
    pub(crate) output: String,
    pub(crate) format: OutputFormatType,
    pub(crate) parse: ParseOptions,
}

impl ReportOptions {
    pub(crate) fn from_args(args: &ArgMatches) -> Result<Self> {
        let output = args
            .get_one::<String>(OUTPUT.0)
            .cloned()
            .unwrap_or_else(|| String::from(STDOUT));
        let format = match args.get_one::<String>(OUTPUT_FORMAT.0) {
            Some(format) => OutputFormatType::try_from(format.as_str())?,
            None => OutputFormatType::Junit,
        };
        let failure_text_limit = args
            .get_one::<usize>(MAX_FAILURE_TEXT)
            .copied()
            .unwrap_or(DEFAULT_FAILURE_TEXT_LIMIT);

        Ok(ReportOptions {
            output,
            format,
            parse: ParseOptions { failure_text_limit },
        })
    }
}

/// Reports a file named on the command line that could not be read or
/// written, and turns it into the error status code.
pub(crate) fn file_failure(
    writer: &mut Writer,
    context: &str,
    e: impl Into<Error>,
) -> Result<i32> {
    let e = e.into();
    error!("{}: {}", context, e);
    writer.write_err(format!("{context}: {e}"))?;
    Ok(ERROR_STATUS_CODE)
}

/// Translates raw benchmark output and writes the report where the options
/// point. A translation error is reported together with the raw output and
/// turned into the error status code.
pub(crate) fn translate_and_write(
    raw: &str,
    options: &ReportOptions,
    writer: &mut Writer,
) -> Result<i32> {
    let translation = match parser::parse(raw, options.parse) {
        Ok(translation) => translation,
        Err(e) => {
            error!("Error parsing 'go test' output: {}", e);
            writer.write_err(format!(
                "Error parsing go test output: {e}.\nOutput:\n{raw}\n"
            ))?;
            return Ok(ERROR_STATUS_CODE);
        }
    };

    if !translation.diagnostics.is_empty() {
        info!(
            "Translated benchmark output with {} warning(s)",
            translation.diagnostics.len()
        );
    }

    match options.output.as_str() {
        STDOUT => translation.report.serialize(writer, options.format)?,
        path => {
            let written = File::create(path)
                .map_err(Error::from)
                .and_then(|mut file| translation.report.serialize(&mut file, options.format));
            if let Err(e) = written {
                return file_failure(writer, &format!("Unable to write report to `{path}`"), e);
            }
        }
    }

    info!(
        "Successfully generated a report for {} package(s) with {} benchmark(s)",
        translation.report.suites.len(),
        translation.report.tests()
    );
    Ok(SUCCESS_STATUS_CODE)
}
