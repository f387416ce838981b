//! Build the single `COPY` statement handed to DuckDB.
//!
//! DuckDB does not accept bound parameters for the `COPY ... TO` target so both
//! paths are embedded as quoted literals instead.

use crate::error::{ConvertError, Result};

/// Largest escaped path we accept, matches Linux `PATH_MAX`.
pub const MAX_LITERAL_LEN: usize = 4096;

/// Double every `'` so `s` can live inside a single-quoted SQL literal.
pub fn escape_single_quotes(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out
}

/// Escape `s`, refusing anything longer than [`MAX_LITERAL_LEN`] instead of cutting it.
pub fn sql_literal(s: &str) -> Result<String> {
    let escaped = escape_single_quotes(s);
    if escaped.len() > MAX_LITERAL_LEN {
        return Err(ConvertError::PathTooLong {
            len: escaped.len(),
            max: MAX_LITERAL_LEN,
        });
    }
    Ok(escaped)
}

pub fn copy_statement(input: &str, output: &str) -> Result<String> {
    let input = sql_literal(input)?;
    let output = sql_literal(output)?;
    Ok(format!(
        "COPY (SELECT * FROM read_csv_auto('{input}', HEADER=TRUE)) TO '{output}' (FORMAT PARQUET);"
    ))
}
