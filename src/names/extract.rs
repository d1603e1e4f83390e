//! Tokenizer and `key-value` extraction for NeuroBlueprint names.

use std::fmt;

use serde::Serialize;

use crate::consts::{KEY_DELIMITER, PAIR_DELIMITER};
use crate::error::KeyError;

/// One `key-value` pair of a name. `value` is `None` when the segment has
/// no dash at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub key: &'a str,
    pub value: Option<&'a str>,
}

/// Split a name on `_`, then each segment on its first `-`.
///
/// Values can contain further dashes but never an underscore.
pub fn segments(name: &str) -> impl Iterator<Item = Segment<'_>> {
    name.split(PAIR_DELIMITER)
        .map(|segment| match segment.split_once(KEY_DELIMITER) {
            Some((key, value)) => Segment {
                key,
                value: Some(value),
            },
            None => Segment {
                key: segment,
                value: None,
            },
        })
}

/// Every value stored under `key` in `name`, in order of appearance.
///
/// An empty result means the key is absent; more than one result means the
/// name repeats the key.
pub fn get_value_from_key<'a>(name: &'a str, key: &str) -> Vec<&'a str> {
    segments(name)
        .filter(|segment| segment.key == key)
        .filter_map(|segment| segment.value)
        .collect()
}

/// The single value stored under `key`, failing if the key is repeated.
pub fn get_unique_value_from_key<'a>(name: &'a str, key: &str) -> Result<Option<&'a str>, KeyError> {
    let values = get_value_from_key(name, key);
    if values.len() > 1 {
        return Err(KeyError::Duplicate {
            key: key.to_string(),
            name: name.to_string(),
        });
    }
    Ok(values.first().copied())
}

/// Count the leading zeros of a numeric id. A `prefix-` in front of the
/// digits is skipped, so `"001"` and `"sub-001"` both give 2.
pub fn num_leading_zeros(value: &str) -> usize {
    let digits = value
        .split_once(KEY_DELIMITER)
        .map_or(value, |(_, rest)| rest);
    digits.chars().take_while(|&c| c == '0').count()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Require every value to be a decimal integer and return it as one.
    pub as_int: bool,
    /// Sort the result instead of keeping batch order.
    pub sort: bool,
}

/// A value pulled out of a name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum ExtractedValue {
    Int(u64),
    Text(String),
}

impl fmt::Display for ExtractedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractedValue::Int(n) => write!(f, "{n}"),
            ExtractedValue::Text(s) => f.write_str(s),
        }
    }
}

fn required_value<'a>(name: &'a str, key: &str) -> Result<&'a str, KeyError> {
    get_unique_value_from_key(name, key)?.ok_or_else(|| KeyError::NotFound {
        key: key.to_string(),
        name: name.to_string(),
    })
}

fn check_digits(value: &str, name: &str, key: &str) -> Result<(), KeyError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(KeyError::InvalidNumber {
            key: key.to_string(),
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Parse a numeric value; `name` and `key` only feed the error message.
pub(crate) fn value_to_int(value: &str, name: &str, key: &str) -> Result<u64, KeyError> {
    check_digits(value, name, key)?;
    value.parse::<u64>().map_err(|_| KeyError::TooLarge {
        key: key.to_string(),
        name: name.to_string(),
    })
}

/// The digit string stored under `key` in each name, in batch order.
pub(crate) fn numeric_values<'a, S: AsRef<str>>(
    names: &'a [S],
    key: &str,
) -> Result<Vec<&'a str>, KeyError> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let value = required_value(name, key)?;
            check_digits(value, name, key)?;
            Ok(value)
        })
        .collect()
}

/// Extract the value of `key` from every name in the batch.
///
/// Fails on the first name that lacks the key, repeats it, or (with
/// `as_int`) holds anything but digits.
pub fn get_values_from_batch<S: AsRef<str>>(
    names: &[S],
    key: &str,
    options: ExtractOptions,
) -> Result<Vec<ExtractedValue>, KeyError> {
    let mut values = names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let value = required_value(name, key)?;
            if options.as_int {
                value_to_int(value, name, key).map(ExtractedValue::Int)
            } else {
                Ok(ExtractedValue::Text(value.to_string()))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    if options.sort {
        values.sort();
    }
    Ok(values)
}
