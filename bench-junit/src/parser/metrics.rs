use crate::parser::errors::Error;
use crate::parser::line::MetricsLine;
use crate::parser::Result;
use crate::report::{Property, ALLOCED_BYTES, ALLOCS, AVG_OP_DURATION, OP_COUNT, THROUGHPUT};

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

fn numeric(line: usize, field: &'static str, value: &str) -> Result<f64> {
    value.parse::<f64>().map_err(|_| Error::InvalidMetric {
        line,
        field,
        value: value.to_string(),
    })
}

/// Converts a benchmark result line into the case properties and the total
/// time the benchmark ran for, in seconds.
pub(crate) fn properties_from_match(
    line: usize,
    metrics: &MetricsLine<'_>,
) -> Result<(Vec<Property>, String)> {
    let op_count = numeric(line, OP_COUNT, metrics.op_count)?;
    let op_duration = numeric(line, AVG_OP_DURATION, metrics.ns_per_op)?;
    let time = format!("{:.6}", op_count * op_duration / NANOS_PER_SECOND);

    let mut properties = vec![
        Property::new(OP_COUNT, metrics.op_count),
        Property::new(AVG_OP_DURATION, metrics.ns_per_op),
    ];
    let optional = [
        (THROUGHPUT, metrics.mb_per_sec),
        (ALLOCED_BYTES, metrics.bytes_per_op),
        (ALLOCS, metrics.allocs_per_op),
    ];
    properties.extend(
        optional
            .iter()
            .filter_map(|(name, value)| value.map(|v| Property::new(name, v))),
    );

    Ok((properties, time))
}
