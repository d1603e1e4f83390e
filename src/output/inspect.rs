use comfy_table::Color;
use serde::Serialize;

use nbnames::Tag;
use nbnames::names::segments;

use crate::output::table::{cell, create_styled_table, header_row};

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct PairReport {
    pub(crate) key: String,
    pub(crate) value: Option<String>,
    /// Set when a datetime key holds a value of the wrong shape.
    pub(crate) issue: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct NameReport {
    pub(crate) name: String,
    pub(crate) pairs: Vec<PairReport>,
}

impl NameReport {
    pub(crate) fn new(name: &str) -> Self {
        let pairs = segments(name)
            .map(|segment| {
                let issue = Tag::from_name(segment.key)
                    .and_then(|tag| tag.value_format().map(|shape| (tag, shape)))
                    .filter(|(tag, _)| !segment.value.is_some_and(|v| tag.value_matches(v)))
                    .map(|(tag, shape)| format!("{} value should be {shape}", tag.name()));
                PairReport {
                    key: segment.key.to_string(),
                    value: segment.value.map(str::to_string),
                    issue,
                }
            })
            .collect();
        NameReport {
            name: name.to_string(),
            pairs,
        }
    }
}

pub(crate) fn print_inspect_table(reports: &[NameReport], use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(header_row(&["Name", "Key", "Value", "Issue"], use_color));

    for report in reports {
        for (i, pair) in report.pairs.iter().enumerate() {
            let name = if i == 0 { report.name.as_str() } else { "" };
            let issue = pair.issue.as_deref().unwrap_or("");
            table.add_row(vec![
                cell(name, None, i == 0),
                cell(&pair.key, None, false),
                cell(pair.value.as_deref().unwrap_or("-"), None, false),
                cell(issue, use_color.then_some(Color::Red), false),
            ]);
        }
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_pairs_in_order() {
        let report = NameReport::new("sub-001_ses-002_suffix");
        let keys: Vec<_> = report.pairs.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["sub", "ses", "suffix"]);
        assert_eq!(report.pairs[2].value, None);
        assert!(report.pairs.iter().all(|p| p.issue.is_none()));
    }

    #[test]
    fn report_flags_bad_datetime_values() {
        let report = NameReport::new("sub-001_date-2024_time-101010_datetime-x");
        assert_eq!(
            report.pairs[1].issue.as_deref(),
            Some("date value should be YYYYMMDD")
        );
        assert_eq!(report.pairs[2].issue, None);
        assert_eq!(
            report.pairs[3].issue.as_deref(),
            Some("datetime value should be YYYYMMDDTHHMMSS")
        );
    }

    #[test]
    fn report_flags_datetime_key_without_value() {
        let report = NameReport::new("sub-001_time");
        assert!(report.pairs[1].issue.is_some());
    }
}
