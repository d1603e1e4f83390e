use thiserror::Error;

/// Structural problems with a batch of names. The messages are shown to the
/// user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("{prefix} names cannot include spaces.")]
    Spaces { prefix: String },

    #[error("The first delimiter of 'sub' or 'ses' must be dash not underscore e.g. sub-001.")]
    FirstDelimiter { name: String },

    #[error(
        "Subject and session names must contain alternating dashes and underscores (used for separating key-value pairs)."
    )]
    Alternation { name: String },

    #[error("The name: {name} must start with the '{prefix}' key e.g. {prefix}-001.")]
    MissingPrefix { prefix: String, name: String },

    #[error(
        "The length of the {prefix} values (e.g. '001') must be consistent across all {prefix} names."
    )]
    InconsistentWidth { prefix: String },

    #[error("{prefix} names must all have unique integer ids after the {prefix} prefix.")]
    DuplicateId { prefix: String },
}

/// Malformed `@TO@` range expressions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error(
        "The name: {name} is not in required format for {marker} keyword. The start must be  be {prefix}-<NUMBER>{marker}<NUMBER>)."
    )]
    Malformed {
        name: String,
        prefix: String,
        marker: &'static str,
    },

    #[error(
        "The number to the left of {marker} must be smaller than the number to the right in: {name}"
    )]
    NotAscending { name: String, marker: &'static str },

    #[error("The range in {name} covers {len} names, more than the limit of {max}.")]
    TooLong { name: String, len: u128, max: u64 },
}

/// Failures while pulling `key-value` pairs out of names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error(
        "There is more than one instance of {key} in {name}. NeuroBlueprint names must contain only one instance of each key."
    )]
    Duplicate { key: String, name: String },

    #[error("The key {key} is not found in {name}")]
    NotFound { key: String, name: String },

    #[error("Invalid character in {key} number: {name}")]
    InvalidNumber { key: String, name: String },

    #[error("{key} number is too large: {name}")]
    TooLarge { key: String, name: String },
}

/// Any failure raised by the name formatting engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Key(#[from] KeyError),
}
