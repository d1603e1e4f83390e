//! Placeholder tags recognised inside names.

/// A recognised placeholder tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Date,
    Time,
    Datetime,
    To,
}

impl Tag {
    pub const ALL: [Tag; 4] = [Tag::Date, Tag::Time, Tag::Datetime, Tag::To];

    /// Tags replaced by a timestamp. `Datetime` comes first so the longest
    /// marker is tried before its shorter relatives.
    pub const DATETIME_TAGS: [Tag; 3] = [Tag::Datetime, Tag::Date, Tag::Time];

    /// Symbolic name, also used as the key written on substitution.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Date => "date",
            Tag::Time => "time",
            Tag::Datetime => "datetime",
            Tag::To => "to",
        }
    }

    /// Canonical marker as typed by users.
    pub fn marker(self) -> &'static str {
        match self {
            Tag::Date => "@DATE@",
            Tag::Time => "@TIME@",
            Tag::Datetime => "@DATETIME@",
            Tag::To => "@TO@",
        }
    }

    pub fn from_name(name: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.name() == name)
    }

    /// Human readable shape of the value a datetime tag produces.
    pub fn value_format(self) -> Option<&'static str> {
        match self {
            Tag::Date => Some("YYYYMMDD"),
            Tag::Time => Some("HHMMSS"),
            Tag::Datetime => Some("YYYYMMDDTHHMMSS"),
            Tag::To => None,
        }
    }

    /// Whether `value` has the shape written for this tag. `To` never
    /// produces a value, so nothing matches it.
    pub fn value_matches(self, value: &str) -> bool {
        match self {
            Tag::Date => is_digits_of_len(value, 8),
            Tag::Time => is_digits_of_len(value, 6),
            Tag::Datetime => match value.split_once('T') {
                Some((date, time)) => is_digits_of_len(date, 8) && is_digits_of_len(time, 6),
                None => false,
            },
            Tag::To => false,
        }
    }
}

fn is_digits_of_len(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// Registry lookup by symbolic name (`"date"`, `"time"`, `"datetime"`, `"to"`).
pub fn tags(name: &str) -> Option<&'static str> {
    Tag::from_name(name).map(Tag::marker)
}
