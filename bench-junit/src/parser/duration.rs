use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize, value},
    multi::many1,
    sequence::{pair, tuple},
    IResult,
};

fn number(input: &str) -> IResult<&str, f64> {
    map_res(
        alt((
            recognize(tuple((digit1, opt(pair(char('.'), digit0))))),
            recognize(pair(char('.'), digit1)),
        )),
        |n: &str| n.parse::<f64>(),
    )(input)
}

/// Seconds per unit. `ms` is tried before `m` so minutes never swallow it.
fn unit(input: &str) -> IResult<&str, f64> {
    alt((
        value(1e-9, tag("ns")),
        value(1e-6, alt((tag("us"), tag("\u{00b5}s"), tag("\u{03bc}s")))),
        value(1e-3, tag("ms")),
        value(1.0, tag("s")),
        value(60.0, tag("m")),
        value(3600.0, tag("h")),
    ))(input)
}

fn magnitude(input: &str) -> IResult<&str, f64> {
    alt((
        map(many1(pair(number, unit)), |parts: Vec<(f64, f64)>| {
            parts
                .into_iter()
                .fold(0.0, |total, (n, scale)| total + n * scale)
        }),
        value(0.0, tag("0")),
    ))(input)
}

fn duration(input: &str) -> IResult<&str, f64> {
    map(
        all_consuming(pair(opt(one_of("+-")), magnitude)),
        |(sign, seconds): (Option<char>, f64)| match sign {
            Some('-') => -seconds,
            _ => seconds,
        },
    )(input)
}

/// Parses the wall-clock time `go test` prints on a package summary line,
/// such as `1.490s`, `250ms` or `1m2.5s`, returning seconds.
pub(crate) fn parse_seconds(text: &str) -> Option<f64> {
    // `-0s` is zero, never negative zero
    duration(text).ok().map(|(_, seconds)| seconds + 0.0)
}
