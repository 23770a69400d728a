use std::fs::File;
use std::io::Write;
use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches, ValueEnum};

use crate::command::Command;
use crate::commands::{self, APP_NAME, COMPLETIONS, LOCATION, SHELL, SUCCESS_STATUS_CODE};
use crate::parser::errors::Error;
use crate::parser::Result;
use crate::utils::get_bench_junit_commands;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

#[derive(Copy, Clone, ValueEnum, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Completions {}

#[allow(clippy::new_without_default)]
impl Completions {
    pub fn new() -> Self {
        Completions {}
    }
}

/// The full command line, as completions need to know every subcommand.
fn app() -> clap::Command {
    get_bench_junit_commands()
        .iter()
        .fold(commands::app(), |app, command| {
            app.subcommand(command.command())
        })
}

impl Command for Completions {
    fn name(&self) -> &'static str {
        COMPLETIONS
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(COMPLETIONS)
            .about("Generates a shell completions script.")
            .arg(
                Arg::new(SHELL.0)
                    .long(SHELL.0)
                    .short(SHELL.1)
                    .help("the shell you are currently running")
                    .action(ArgAction::Set)
                    .value_parser(clap::value_parser!(Shell))
                    .required(true),
            )
            .arg(
                Arg::new(LOCATION.0)
                    .long(LOCATION.0)
                    .short(LOCATION.1)
                    .help("the directory the completions script is written to, if absent the script is written to stdout")
                    .action(ArgAction::Set),
            )
    }

    fn execute(&self, args: &ArgMatches, writer: &mut Writer, _: &mut Reader) -> Result<i32> {
        let shell = match args.get_one::<Shell>(SHELL.0) {
            Some(shell) => *shell,
            None => {
                return Err(Error::IllegalArguments(String::from(
                    "a shell is required to generate completions",
                )))
            }
        };

        let mut out: Box<dyn Write + '_> = match args.get_one::<String>(LOCATION.0) {
            Some(location) => {
                let path = Path::new(location);
                if !path.is_dir() {
                    return Err(Error::InvalidCompletionsPath(format!(
                        "`{location}` is not a directory"
                    )));
                }
                Box::new(File::create(path.join(format!("{APP_NAME}.sh")))?)
            }
            None => Box::new(writer),
        };

        let mut app = app();
        match shell {
            Shell::Bash => {
                clap_complete::generate(clap_complete::shells::Bash, &mut app, APP_NAME, &mut out)
            }
            Shell::Zsh => {
                clap_complete::generate(clap_complete::shells::Zsh, &mut app, APP_NAME, &mut out)
            }
            Shell::Fish => {
                clap_complete::generate(clap_complete::shells::Fish, &mut app, APP_NAME, &mut out)
            }
            Shell::PowerShell => clap_complete::generate(
                clap_complete::shells::PowerShell,
                &mut app,
                APP_NAME,
                &mut out,
            ),
        }

        Ok(SUCCESS_STATUS_CODE)
    }
}
