use std::collections::HashMap;
use std::process::exit;

use log::LevelFilter;
use simple_logger::SimpleLogger;

use bench_junit::command::Command;
use bench_junit::commands::{self, VERBOSE};
use bench_junit::utils::get_bench_junit_commands;
use bench_junit::utils::reader::{ReadBuffer, Reader};
use bench_junit::utils::writer::Writer;
use bench_junit::Error;

fn log_level(occurrences: u8) -> LevelFilter {
    match occurrences {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<(), Error> {
    let mut app = commands::app();

    let commands: Vec<Box<dyn Command>> = get_bench_junit_commands();

    let mappings = commands.iter().map(|s| (s.name(), s)).fold(
        HashMap::with_capacity(commands.len()),
        |mut map, entry| {
            map.insert(entry.0, entry.1.as_ref());
            map
        },
    );

    for each in &commands {
        app = app.subcommand(each.command());
    }

    let help = app.render_usage();
    let app = app.get_matches();

    if let Err(e) = SimpleLogger::new()
        .with_level(log_level(app.get_count(VERBOSE.0)))
        .init()
    {
        eprintln!("Unable to initialize logging {e}");
    }

    match app.subcommand() {
        Some((name, value)) => {
            if let Some(command) = mappings.get(name) {
                let mut output_writer = Writer::default();

                match (*command).execute(
                    value,
                    &mut output_writer,
                    &mut Reader::new(ReadBuffer::Stdin(std::io::stdin())),
                ) {
                    Err(e) => {
                        output_writer
                            .write_err(format!("Error occurred {e}"))
                            .expect("failed to write to stderr");

                        exit(-1);
                    }
                    Ok(code) => exit(code),
                }
            } else {
                println!("{}", help);
            }
        }
        None => {
            println!("{}", help);
        }
    }

    Ok(())
}
