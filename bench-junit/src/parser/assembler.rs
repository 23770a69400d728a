use log::{debug, error, trace, warn};

use crate::parser::duration::parse_seconds;
use crate::parser::errors::{Diagnostic, Error};
use crate::parser::line::{classify, ActionKind, Line};
use crate::parser::log_text::{truncate, LogText};
use crate::parser::metrics::properties_from_match;
use crate::parser::{ParseOptions, Result, Translation};
use crate::report::{Failure, Property, TestCase, TestSuite, TestSuites, CATEGORIZED_FAIL};

/// Builds a report out of `go test -bench` output one line at a time.
///
/// At most one package is open at any point. The most recent case of that
/// package is the one indented log output gets attached to.
#[derive(Debug, Default)]
pub struct Assembler {
    options: ParseOptions,
    suite: Option<TestSuite>,
    report: TestSuites,
    log_text: LogText,
    diagnostics: Vec<Diagnostic>,
    line_num: usize,
}

impl Assembler {
    pub fn new(options: ParseOptions) -> Self {
        Assembler {
            options,
            ..Default::default()
        }
    }

    pub fn feed(&mut self, line: &str) -> Result<()> {
        self.line_num += 1;
        let line = line.strip_suffix('\r').unwrap_or(line);

        let classified = classify(line)?;
        if !matches!(classified, Line::Continuation(..)) {
            self.flush_log_text();
        }

        match classified {
            Line::Continuation(text) => self.log_text.push(text),

            Line::SuiteStart { name } => {
                debug!("Line {}: starting package {}", self.line_num, name);
                if let Some(previous) = self.suite.replace(TestSuite::new(name.to_string())) {
                    self.diagnose(Diagnostic::UnterminatedSuite {
                        line: self.line_num,
                        name: previous.name,
                    });
                }
            }

            Line::SuiteEnd {
                status,
                name,
                duration,
            } => {
                let mut suite = match self.suite.take() {
                    Some(suite) if suite.name == name => suite,
                    open => {
                        return Err(Error::SuiteMismatch {
                            line: self.line_num,
                            found: name.to_string(),
                            open: open.map(|s| s.name).unwrap_or_default(),
                        })
                    }
                };
                let seconds = parse_seconds(duration).ok_or_else(|| Error::InvalidDuration {
                    line: self.line_num,
                    value: duration.to_string(),
                })?;
                suite.time = format!("{:.6}", seconds);
                debug!(
                    "Line {}: package {} finished {:?} with {} benchmarks, {} failed",
                    self.line_num, suite.name, status, suite.tests, suite.failures
                );
                self.report.suites.push(suite);
            }

            Line::Metrics(metrics) => {
                let (properties, time) = properties_from_match(self.line_num, &metrics)?;
                if let Some(suite) = self.open_suite(metrics.name) {
                    let case = TestCase {
                        class_name: suite.class_name().to_string(),
                        name: metrics.name.to_string(),
                        time,
                        properties,
                        ..Default::default()
                    };
                    suite.test_cases.push(case);
                    suite.tests += 1;
                }
            }

            Line::Action { kind, name } => match kind {
                ActionKind::Bench => {}
                ActionKind::Skip => {
                    if let Some(suite) = self.open_suite(name) {
                        let case = TestCase {
                            class_name: suite.class_name().to_string(),
                            name: name.to_string(),
                            time: String::from("0"),
                            skipped: true,
                            ..Default::default()
                        };
                        suite.test_cases.push(case);
                    }
                }
                ActionKind::Fail => {
                    if let Some(suite) = self.open_suite(name) {
                        let case = TestCase {
                            class_name: suite.class_name().to_string(),
                            name: name.to_string(),
                            time: String::from("0"),
                            failure: Some(Failure::default()),
                            ..Default::default()
                        };
                        suite.test_cases.push(case);
                        suite.failures += 1;
                        suite.tests += 1;
                    }
                }
            },

            Line::Unmatched => trace!("Line {}: ignoring `{}`", self.line_num, line),
        }

        Ok(())
    }

    /// Flushes any pending log output and hands back the report.
    pub fn finish(mut self) -> Translation {
        self.flush_log_text();
        if let Some(suite) = self.suite.take() {
            self.diagnose(Diagnostic::UnterminatedSuite {
                line: self.line_num,
                name: suite.name,
            });
        }

        Translation {
            report: self.report,
            diagnostics: self.diagnostics,
        }
    }

    fn open_suite(&mut self, case_name: &str) -> Option<&mut TestSuite> {
        if self.suite.is_none() {
            self.diagnose(Diagnostic::CaseOutsideSuite {
                line: self.line_num,
                name: case_name.to_string(),
            });
        }
        self.suite.as_mut()
    }

    fn flush_log_text(&mut self) {
        let text = match self.log_text.take() {
            Some(text) => truncate(&text, self.options.failure_text_limit),
            None => return,
        };

        match self
            .suite
            .as_mut()
            .and_then(|suite| suite.test_cases.last_mut())
        {
            Some(case) => record_log_text(case, text),
            None => self.diagnose(Diagnostic::LogTextWithoutCase {
                line: self.line_num,
            }),
        }
    }

    fn diagnose(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::LogTextWithoutCase { .. } => error!("{}", diagnostic),
            _ => warn!("{}", diagnostic),
        }
        self.diagnostics.push(diagnostic);
    }
}

// Log output is only kept for failed benchmarks.
fn record_log_text(case: &mut TestCase, text: String) {
    if let Some(failure) = case.failure.as_mut() {
        failure.text = text.clone();
        case.properties.push(Property::new(CATEGORIZED_FAIL, text));
    }
}

#[cfg(test)]
#[path = "assembler_tests.rs"]
mod assembler_tests;
