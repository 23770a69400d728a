pub mod assembler;
pub(crate) mod duration;
pub mod errors;
pub(crate) mod line;
pub(crate) mod log_text;
pub(crate) mod metrics;

use crate::parser::assembler::Assembler;
use crate::parser::errors::{Diagnostic, Error};
use crate::report::TestSuites;

pub use crate::parser::log_text::DEFAULT_FAILURE_TEXT_LIMIT;

pub type Result<R> = std::result::Result<R, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of characters of log output kept for a failed benchmark.
    pub failure_text_limit: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            failure_text_limit: DEFAULT_FAILURE_TEXT_LIMIT,
        }
    }
}

/// Outcome of a successful translation. Diagnostics describe input that was
/// tolerated but looked out of order.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub report: TestSuites,
    pub diagnostics: Vec<Diagnostic>,
}

/// Translates the complete combined output of a `go test -bench` run into a
/// report. Any structural inconsistency aborts the whole translation; no
/// partial report is produced.
pub fn parse(raw: &str, options: ParseOptions) -> Result<Translation> {
    let mut assembler = Assembler::new(options);
    for line in raw.lines() {
        assembler.feed(line)?;
    }
    Ok(assembler.finish())
}
