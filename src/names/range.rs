//! Expansion of `sub-<N>@TO@<M>` into one name per id.

use crate::consts::{KEY_DELIMITER, MAX_RANGE_LEN, PAIR_DELIMITER};
use crate::error::RangeError;
use crate::names::Prefix;
use crate::names::extract::num_leading_zeros;
use crate::names::tags::Tag;

struct RangeName<'a> {
    start: u64,
    end: u64,
    width: usize,
    suffix: &'a str,
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse `<prefix>-<N>@TO@<M>[_<suffix>]`. The range must be the whole
/// first `key-value` pair; the suffix keeps its leading underscore.
fn parse_range_name(name: &str, prefix: Prefix) -> Result<RangeName<'_>, RangeError> {
    let marker = Tag::To.marker();
    let malformed = || RangeError::Malformed {
        name: name.to_string(),
        prefix: prefix.to_string(),
        marker,
    };

    let (head, suffix) = name
        .find(PAIR_DELIMITER)
        .map_or((name, ""), |idx| name.split_at(idx));

    let (left, right) = head
        .strip_prefix(prefix.as_str())
        .and_then(|rest| rest.strip_prefix(KEY_DELIMITER))
        .and_then(|range| range.split_once(marker))
        .filter(|(left, right)| is_number(left) && is_number(right))
        .ok_or_else(malformed)?;

    let start = left.parse::<u64>().map_err(|_| malformed())?;
    let end = right.parse::<u64>().map_err(|_| malformed())?;
    if start >= end {
        return Err(RangeError::NotAscending {
            name: name.to_string(),
            marker,
        });
    }

    // 0@TO@u64::MAX spans one more name than u64 can count
    let len = u128::from(end) - u128::from(start) + 1;
    if len > u128::from(MAX_RANGE_LEN) {
        return Err(RangeError::TooLong {
            name: name.to_string(),
            len,
            max: MAX_RANGE_LEN,
        });
    }

    Ok(RangeName {
        start,
        end,
        width: num_leading_zeros(left).max(num_leading_zeros(right)) + 1,
        suffix,
    })
}

/// Replace every name holding an `@TO@` range with the run of names it
/// describes. Other names pass through; batch order is kept.
///
/// Ids are zero-filled to one more digit than the most zero-padded end of
/// the range, so `01@TO@3` gives `01, 02, 03` and `4@TO@005` gives
/// `004, 005`.
pub fn update_names_with_range_to_flag<S: AsRef<str>>(
    names: &[S],
    prefix: Prefix,
) -> Result<Vec<String>, RangeError> {
    let mut expanded = Vec::with_capacity(names.len());

    for name in names {
        let name = name.as_ref();
        if !name.contains(Tag::To.marker()) {
            expanded.push(name.to_string());
            continue;
        }

        let range = parse_range_name(name, prefix)?;
        tracing::debug!(
            name,
            start = range.start,
            end = range.end,
            width = range.width,
            "expanding range"
        );
        expanded.extend((range.start..=range.end).map(|id| {
            format!(
                "{prefix}{KEY_DELIMITER}{id:0width$}{suffix}",
                width = range.width,
                suffix = range.suffix
            )
        }));
    }

    Ok(expanded)
}
