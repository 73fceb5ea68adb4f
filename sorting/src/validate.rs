//! Input checks that run before any algorithm touches the data.
//!
//! A typed `&[i64]` can only be too long. The loosely typed forms (a JSON
//! value, a line of text) can also fail to be a sequence of integers at all.

use serde_json::Value;

use crate::error::SortError;

/// Sequences must be strictly shorter than this.
pub const MAX_LEN: usize = 200_000;

/// Check that `sequence` may be sorted.
pub fn validate(sequence: &[i64]) -> Result<(), SortError> {
    check_len(sequence.len())
}

fn check_len(len: usize) -> Result<(), SortError> {
    if len >= MAX_LEN {
        tracing::debug!(len, max = MAX_LEN, "rejecting oversized sequence");
        return Err(SortError::Size { len, max: MAX_LEN });
    }
    Ok(())
}

/// Convert a JSON value into a sequence.
///
/// The value must be an array whose every element is an integer that fits
/// into `i64`. Floats are rejected even when they have no fractional part.
pub fn sequence_from_json(value: &Value) -> Result<Vec<i64>, SortError> {
    let Some(items) = value.as_array() else {
        tracing::debug!(kind = json_kind(value), "rejecting non-array input");
        return Err(SortError::type_error(format!(
            "input must be a list of integers, got {}",
            json_kind(value)
        )));
    };
    check_len(items.len())?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_i64().ok_or_else(|| {
                tracing::debug!(index = i, kind = json_kind(item), "rejecting element");
                SortError::type_error(format!(
                    "element {i} is {}, only integers can be sorted",
                    json_kind(item)
                ))
            })
        })
        .collect()
}

/// Parse a whitespace separated line of integers, e.g. `"5 1 3 2 4"`.
///
/// Blank text is the empty sequence.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>, SortError> {
    let sequence = text
        .split_ascii_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i64>().map_err(|_| {
                tracing::debug!(index = i, token, "rejecting token");
                SortError::type_error(format!("token {i} `{token}` is not an integer"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    validate(&sequence)?;
    Ok(sequence)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a float",
        Value::Number(_) => "an out of range integer",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
