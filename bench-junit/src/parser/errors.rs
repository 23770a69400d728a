use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error serializing report to JSON {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Error writing report XML {0}")]
    XmlError(#[from] quick_xml::Error),
    #[error("I/O error when reading {0}")]
    IoError(#[from] std::io::Error),
    #[error("Regex expression error while classifying benchmark output {0}")]
    RegexError(#[from] fancy_regex::Error),
    #[error("line {line}: mismatched package summary for `{found}` with `{open}` benchmarks")]
    SuiteMismatch {
        line: usize,
        found: String,
        open: String,
    },
    #[error("line {line}: failed to parse package test time `{value}`")]
    InvalidDuration { line: usize, value: String },
    #[error("line {line}: error parsing benchmark metric values, {field} `{value}` is not numeric")]
    InvalidMetric {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("Unable to execute benchmarks `{0}`")]
    ProcessError(String),
    #[error("{0}")]
    IllegalArguments(String),
    #[error("Could not write completions script, {0}")]
    InvalidCompletionsPath(String),
}

/// Soft anomalies found while assembling a report. None of these abort the
/// translation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("line {line}: tried to record benchmark log text before any benchmarks were found for the package")]
    LogTextWithoutCase { line: usize },
    #[error("line {line}: benchmark `{name}` reported outside of any package, ignoring it")]
    CaseOutsideSuite { line: usize, name: String },
    #[error("line {line}: package `{name}` never reported a summary, discarding its benchmarks")]
    UnterminatedSuite { line: usize, name: String },
}
