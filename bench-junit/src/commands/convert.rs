use std::fs::File;

use clap::{Arg, ArgAction, ArgMatches};
use log::info;

use crate::command::Command;
use crate::commands::common::{
    file_failure, translate_and_write, with_report_args, ReportOptions,
};
use crate::commands::{CONVERT, INPUT};
use crate::parser::Result;
use crate::utils::reader::{ReadBuffer, Reader};
use crate::utils::writer::Writer;

/// Translates benchmark output captured by an earlier `go test -bench` run.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Convert {}

#[allow(clippy::new_without_default)]
impl Convert {
    pub fn new() -> Self {
        Convert {}
    }
}

impl Command for Convert {
    fn name(&self) -> &'static str {
        CONVERT
    }

    fn command(&self) -> clap::Command {
        let command = clap::Command::new(CONVERT)
            .about("Translates previously captured go benchmark output into JUnit XML.")
            .arg(
                Arg::new(INPUT.0)
                    .long(INPUT.0)
                    .short(INPUT.1)
                    .help("File holding the go test output, read from stdin when absent")
                    .action(ArgAction::Set)
                    .required(false),
            );

        with_report_args(command)
    }

    fn execute(&self, args: &ArgMatches, writer: &mut Writer, reader: &mut Reader) -> Result<i32> {
        let options = ReportOptions::from_args(args)?;

        let raw = match args.get_one::<String>(INPUT.0) {
            Some(file) => {
                info!("Reading benchmark output from {}", file);
                let read = File::open(file)
                    .and_then(|input| Reader::new(ReadBuffer::File(input)).read_lossy());
                match read {
                    Ok(raw) => raw,
                    Err(e) => {
                        return file_failure(writer, &format!("Unable to read `{file}`"), e)
                    }
                }
            }
            None => reader.read_lossy()?,
        };

        translate_and_write(&raw, &options, writer)
    }
}
