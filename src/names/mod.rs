pub mod datetime;
pub mod extract;
pub mod pipeline;
pub mod range;
pub mod tags;
pub mod validate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use datetime::{substitute_datetime_tags, update_names_with_datetime};
pub use extract::{
    ExtractOptions, ExtractedValue, Segment, get_unique_value_from_key, get_value_from_key,
    get_values_from_batch, num_leading_zeros, segments,
};
pub use pipeline::{NameInput, check_and_format_names, check_and_format_names_with_clock};
pub use range::update_names_with_range_to_flag;
pub use tags::{Tag, tags};
pub use validate::validate_names;

/// The mandatory first key of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prefix {
    Sub,
    Ses,
}

impl Prefix {
    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::Sub => "sub",
            Prefix::Ses => "ses",
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Prefix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sub" => Ok(Prefix::Sub),
            "ses" => Ok(Prefix::Ses),
            other => Err(format!("Invalid prefix \"{other}\" (expected sub or ses)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_round_trips_through_str() {
        assert_eq!("sub".parse::<Prefix>().unwrap(), Prefix::Sub);
        assert_eq!(" SES ".parse::<Prefix>().unwrap(), Prefix::Ses);
        assert_eq!(Prefix::Ses.to_string(), "ses");
    }

    #[test]
    fn prefix_rejects_unknown() {
        let err = "run".parse::<Prefix>().unwrap_err();
        assert!(err.contains("run"));
    }
}
