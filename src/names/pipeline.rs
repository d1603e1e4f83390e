//! Batch formatting: tag substitution, range expansion, then validation.

use crate::clock::{Clock, SystemClock};
use crate::error::NameError;
use crate::names::Prefix;
use crate::names::datetime::update_names_with_datetime;
use crate::names::range::update_names_with_range_to_flag;
use crate::names::validate::validate_names;

/// A single name or a batch of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameInput(Vec<String>);

impl NameInput {
    pub fn into_names(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for NameInput {
    fn from(name: &str) -> Self {
        NameInput(vec![name.to_string()])
    }
}

impl From<String> for NameInput {
    fn from(name: String) -> Self {
        NameInput(vec![name])
    }
}

impl From<Vec<String>> for NameInput {
    fn from(names: Vec<String>) -> Self {
        NameInput(names)
    }
}

impl From<&[String]> for NameInput {
    fn from(names: &[String]) -> Self {
        NameInput(names.to_vec())
    }
}

impl From<&[&str]> for NameInput {
    fn from(names: &[&str]) -> Self {
        NameInput(names.iter().map(|name| name.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for NameInput {
    fn from(names: [&str; N]) -> Self {
        NameInput(names.iter().map(|name| name.to_string()).collect())
    }
}

/// [`check_and_format_names_with_clock`] reading the local wall clock.
pub fn check_and_format_names(
    names: impl Into<NameInput>,
    prefix: Prefix,
) -> Result<Vec<String>, NameError> {
    check_and_format_names_with_clock(names, prefix, &SystemClock::default())
}

/// Substitute datetime tags, expand `@TO@` ranges and validate the result.
///
/// Either the whole batch comes back formatted or the first problem found
/// is returned.
pub fn check_and_format_names_with_clock(
    names: impl Into<NameInput>,
    prefix: Prefix,
    clock: &dyn Clock,
) -> Result<Vec<String>, NameError> {
    let mut names = names.into().into_names();

    update_names_with_datetime(&mut names, clock);
    let result = update_names_with_range_to_flag(&names, prefix)
        .map_err(NameError::from)
        .and_then(|expanded| validate_names(&expanded, prefix).map(|()| expanded));

    match &result {
        Ok(formatted) => tracing::debug!(prefix = %prefix, count = formatted.len(), "formatted names"),
        Err(e) => tracing::debug!(prefix = %prefix, error = %e, "rejected names"),
    }
    result
}
