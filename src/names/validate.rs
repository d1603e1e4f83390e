//! Structural checks run over a batch of names before they become paths.
//!
//! Rules run in a fixed order and the first one violated is reported.

use std::collections::HashSet;

use crate::consts::{KEY_DELIMITER, PAIR_DELIMITER};
use crate::error::{FormatError, NameError};
use crate::names::Prefix;
use crate::names::extract::{num_leading_zeros, numeric_values, segments};

fn delimiters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars()
        .filter(|&c| c == KEY_DELIMITER || c == PAIR_DELIMITER)
}

pub fn check_no_spaces<S: AsRef<str>>(names: &[S], prefix: Prefix) -> Result<(), FormatError> {
    if names.iter().any(|name| name.as_ref().contains(' ')) {
        return Err(FormatError::Spaces {
            prefix: prefix.to_string(),
        });
    }
    Ok(())
}

/// The key of the first pair must be closed by a dash. A name without any
/// delimiter fails too.
pub fn check_first_delimiter<S: AsRef<str>>(names: &[S]) -> Result<(), FormatError> {
    for name in names {
        let name = name.as_ref();
        if delimiters(name).next() != Some(KEY_DELIMITER) {
            return Err(FormatError::FirstDelimiter {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Delimiters must read `-`, `_`, `-`, `_`, ... left to right. Dashes may
/// not appear inside values, underscores never appear inside keys.
pub fn check_dashes_and_underscores_alternate<S: AsRef<str>>(
    names: &[S],
) -> Result<(), FormatError> {
    for name in names {
        let name = name.as_ref();
        let alternates = delimiters(name).enumerate().all(|(i, c)| {
            let expected = if i % 2 == 0 {
                KEY_DELIMITER
            } else {
                PAIR_DELIMITER
            };
            c == expected
        });
        if !alternates {
            return Err(FormatError::Alternation {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

pub fn check_prefix_key<S: AsRef<str>>(names: &[S], prefix: Prefix) -> Result<(), FormatError> {
    for name in names {
        let name = name.as_ref();
        let first_key = segments(name).next().map(|segment| segment.key);
        if first_key != Some(prefix.as_str()) {
            return Err(FormatError::MissingPrefix {
                prefix: prefix.to_string(),
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Every id must carry the same number of leading zeros. `sub-9` next to
/// `sub-10` passes (no zeros on either), `sub-001` next to `sub-010` does not.
pub fn check_consistent_leading_zeros(ids: &[&str], prefix: Prefix) -> Result<(), FormatError> {
    let widths: HashSet<usize> = ids.iter().map(|id| num_leading_zeros(id)).collect();
    if widths.len() > 1 {
        return Err(FormatError::InconsistentWidth {
            prefix: prefix.to_string(),
        });
    }
    Ok(())
}

/// Ids compare by integer value, so `01` and `001` collide.
pub fn check_unique_ids(ids: &[&str], prefix: Prefix) -> Result<(), FormatError> {
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        let value = id.trim_start_matches('0');
        if !seen.insert(value) {
            return Err(FormatError::DuplicateId {
                prefix: prefix.to_string(),
            });
        }
    }
    Ok(())
}

/// Run every rule over the batch.
pub fn validate_names<S: AsRef<str>>(names: &[S], prefix: Prefix) -> Result<(), NameError> {
    check_no_spaces(names, prefix)?;
    check_first_delimiter(names)?;
    check_dashes_and_underscores_alternate(names)?;
    check_prefix_key(names, prefix)?;

    let ids = numeric_values(names, prefix.as_str())?;
    check_consistent_leading_zeros(&ids, prefix)?;
    check_unique_ids(&ids, prefix)?;
    Ok(())
}
