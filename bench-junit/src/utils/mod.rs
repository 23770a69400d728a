use crate::command::Command;
use crate::commands;

pub mod reader;
pub mod writer;

pub fn get_bench_junit_commands() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(commands::run::Run::new()),
        Box::new(commands::convert::Convert::new()),
        Box::new(commands::completions::Completions::new()),
    ]
}
