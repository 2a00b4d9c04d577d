use std::num::ParseIntError;

use thiserror::Error;

/// Whitespace per the C locale: space, tab, newline, vertical tab, form
/// feed, carriage return.
#[inline]
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Split input lines into whitespace-delimited tokens.
///
/// Equivalent to joining the lines with single spaces, trimming both
/// ends, collapsing every whitespace run to one space, and splitting on
/// that space. Tokens never span lines, so each line is scanned on its
/// own. A non-empty input holding nothing but whitespace yields a single
/// empty token, the same shape splitting an empty string produces.
pub fn split_words(lines: &[String]) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for line in lines {
        words.extend(
            line.split(is_space)
                .filter(|tok| !tok.is_empty())
                .map(str::to_string),
        );
    }
    if words.is_empty() {
        words.push(String::new());
    }
    words
}

/// A token that does not fit a 64-bit signed integer.
#[derive(Debug, Error)]
#[error("invalid number '{token}': {source}")]
pub struct NumberError {
    pub token: String,
    #[source]
    pub source: ParseIntError,
}

/// Parse every token as an `i64`. The first malformed token aborts the
/// whole run; there is no partial result.
pub fn parse_numbers(tokens: Vec<String>) -> Result<Vec<i64>, NumberError> {
    tokens
        .into_iter()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|source| NumberError { token, source })
        })
        .collect()
}
