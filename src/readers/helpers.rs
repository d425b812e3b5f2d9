// src/readers/helpers.rs

//! Miscellaneous helper functions for _Readers_.

use crate::common::{Count, FPath, LineIndex, ParseError, ResultParse};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Return the basename of an `FPath`.
pub fn basename(path: &FPath) -> FPath {
    let mut riter = path.rsplit(std::path::MAIN_SEPARATOR);

    FPath::from(riter.next().unwrap_or(""))
}

/// Parse the integer after the first `':'` in `line`,
/// e.g. `"Number of users found:4"` returns `4`.
///
/// `at` is the index of `line`, used for the returned error.
pub fn count_after_colon(
    line: &str,
    at: LineIndex,
) -> ResultParse<Count> {
    defñ!("({:?}, {})", line, at);
    let value: Option<&str> = line.split(':').nth(1);
    match value.map(|s| s.trim().parse::<Count>()) {
        Some(Ok(count)) => Ok(count),
        _ => Err(ParseError::BadCount {
            line: String::from(line),
            at,
        }),
    }
}

/// Parse the last whitespace-separated token of `line` as an integer,
/// e.g. `"Number of keys found 5"` returns `5`.
///
/// `at` is the index of `line`, used for the returned error.
pub fn count_last_token(
    line: &str,
    at: LineIndex,
) -> ResultParse<Count> {
    defñ!("({:?}, {})", line, at);
    match line.split_whitespace().last().map(|s| s.parse::<Count>()) {
        Some(Ok(count)) => Ok(count),
        _ => Err(ParseError::BadCount {
            line: String::from(line),
            at,
        }),
    }
}
