pub mod junit;

use std::convert::TryFrom;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::parser::Result;

pub const OP_COUNT: &str = "op count";
pub const AVG_OP_DURATION: &str = "avg op duration (ns/op)";
pub const THROUGHPUT: &str = "MB/s";
pub const ALLOCED_BYTES: &str = "alloced B/op";
pub const ALLOCS: &str = "allocs/op";
pub const CATEGORIZED_FAIL: &str = "categorized_fail";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormatType {
    Junit,
    Json,
}

impl OutputFormatType {
    pub const VARIANTS: [&'static str; 2] = ["junit", "json"];
}

impl TryFrom<&str> for OutputFormatType {
    type Error = crate::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "junit" => Ok(OutputFormatType::Junit),
            "json" => Ok(OutputFormatType::Json),
            other => Err(crate::Error::IllegalArguments(format!(
                "unsupported output format `{other}`, expected one of {:?}",
                Self::VARIANTS
            ))),
        }
    }
}

/// Root of the translated report, one entry per benchmarked package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestSuites {
    pub suites: Vec<TestSuite>,
}

impl TestSuites {
    pub fn tests(&self) -> usize {
        self.suites.iter().map(|s| s.tests).sum()
    }

    pub fn failures(&self) -> usize {
        self.suites.iter().map(|s| s.failures).sum()
    }

    /// Sum of the package wall-clock times, in seconds.
    pub fn time(&self) -> f64 {
        self.suites
            .iter()
            .map(|s| s.time.parse::<f64>().unwrap_or_default())
            .fold(0.0, |total, time| total + time)
    }

    pub fn serialize(&self, writer: &mut dyn Write, format: OutputFormatType) -> Result<()> {
        match format {
            OutputFormatType::Junit => junit::serialize(self, writer),
            OutputFormatType::Json => {
                serde_json::to_writer_pretty(&mut *writer, self)?;
                writeln!(writer)?;
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestSuite {
    pub name: String,
    pub tests: usize,
    pub failures: usize,
    pub time: String,
    pub test_cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(name: String) -> Self {
        TestSuite {
            name,
            ..Default::default()
        }
    }

    /// Trailing component of the package path, used as the class name of
    /// every case in the suite.
    pub fn class_name(&self) -> &str {
        let trimmed = self.name.trim_end_matches('/');
        match trimmed.rsplit('/').next() {
            Some(base) if !base.is_empty() => base,
            _ if self.name.starts_with('/') => "/",
            _ => ".",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub class_name: String,
    pub name: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub skipped: bool,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Property {
            name: name.to_string(),
            value: value.into(),
        }
    }
}
