use fancy_regex::{Captures, Regex};
use lazy_static::lazy_static;

use crate::parser::Result;

/// Indentation `go test` puts in front of benchmark log output.
pub(crate) const CONTINUATION_PREFIX: &str = "    ";

lazy_static! {
    // Character classes are ASCII only, `go test` never separates fields with
    // anything else.
    //
    // pkg: k8s.io/test-infra/experiment/dummybenchmarks
    static ref SUITE_START: Regex =
        Regex::new(r"^pkg:[[:space:]]+([^[:space:]]+)[[:space:]]*$").unwrap();
    // ok  	k8s.io/test-infra/experiment/dummybenchmarks/subpkg	1.490s
    // FAIL	k8s.io/test-infra/experiment/dummybenchmarks	17.829s
    static ref SUITE_END: Regex = Regex::new(
        r"^(ok|FAIL)[[:space:]]+([^[:space:]]+)[[:space:]]+([^[:space:]]+)[[:space:]]*$"
    )
    .unwrap();
    // BenchmarkAllocsAndBytes-4   	10000000	       131 ns/op	 152.50 MB/s	     112 B/op	       2 allocs/op
    static ref BENCH_METRICS: Regex = Regex::new(
        r"^(Benchmark[^[:space:]]*)[[:space:]]+([0-9]+)[[:space:]]+([0-9.]+) ns/op(?:[[:space:]]+([0-9.]+) MB/s)?(?:[[:space:]]+([0-9.]+) B/op)?(?:[[:space:]]+([0-9.]+) allocs/op)?[[:space:]]*$"
    )
    .unwrap();
    // --- SKIP: BenchmarkSkip
    static ref ACTION: Regex =
        Regex::new(r"^--- (BENCH|SKIP|FAIL):[[:space:]]+([^[:space:]]+)[[:space:]]*$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SuiteStatus {
    Ok,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActionKind {
    /// Only introduces log output for the benchmark reported just before.
    Bench,
    Skip,
    Fail,
}

/// Captured fields of a benchmark result line, all still in their raw form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MetricsLine<'line> {
    pub(crate) name: &'line str,
    pub(crate) op_count: &'line str,
    pub(crate) ns_per_op: &'line str,
    pub(crate) mb_per_sec: Option<&'line str>,
    pub(crate) bytes_per_op: Option<&'line str>,
    pub(crate) allocs_per_op: Option<&'line str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line<'line> {
    Continuation(&'line str),
    SuiteStart {
        name: &'line str,
    },
    SuiteEnd {
        status: SuiteStatus,
        name: &'line str,
        duration: &'line str,
    },
    Metrics(MetricsLine<'line>),
    Action {
        kind: ActionKind,
        name: &'line str,
    },
    Unmatched,
}

fn group<'line>(captures: &Captures<'line>, index: usize) -> &'line str {
    captures.get(index).map_or("", |m| m.as_str())
}

fn optional_group<'line>(captures: &Captures<'line>, index: usize) -> Option<&'line str> {
    captures
        .get(index)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

/// Classifies a single line of `go test` output. Shapes are tested in a fixed
/// order and the first one that matches wins.
pub(crate) fn classify(line: &str) -> Result<Line<'_>> {
    if let Some(rest) = line.strip_prefix(CONTINUATION_PREFIX) {
        return Ok(Line::Continuation(rest));
    }

    if let Some(captures) = SUITE_START.captures(line)? {
        return Ok(Line::SuiteStart {
            name: group(&captures, 1),
        });
    }

    if let Some(captures) = SUITE_END.captures(line)? {
        let status = match group(&captures, 1) {
            "ok" => SuiteStatus::Ok,
            _ => SuiteStatus::Fail,
        };
        return Ok(Line::SuiteEnd {
            status,
            name: group(&captures, 2),
            duration: group(&captures, 3),
        });
    }

    if let Some(captures) = BENCH_METRICS.captures(line)? {
        return Ok(Line::Metrics(MetricsLine {
            name: group(&captures, 1),
            op_count: group(&captures, 2),
            ns_per_op: group(&captures, 3),
            mb_per_sec: optional_group(&captures, 4),
            bytes_per_op: optional_group(&captures, 5),
            allocs_per_op: optional_group(&captures, 6),
        }));
    }

    if let Some(captures) = ACTION.captures(line)? {
        let kind = match group(&captures, 1) {
            "SKIP" => ActionKind::Skip,
            "FAIL" => ActionKind::Fail,
            _ => ActionKind::Bench,
        };
        return Ok(Line::Action {
            kind,
            name: group(&captures, 2),
        });
    }

    Ok(Line::Unmatched)
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod line_tests;
