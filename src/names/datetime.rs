//! Substitution of `@DATE@`, `@TIME@` and `@DATETIME@` tags.

use crate::clock::Clock;
use crate::consts::{DATE_FORMAT, KEY_DELIMITER, PAIR_DELIMITER, TIME_FORMAT};
use crate::names::tags::Tag;

/// The `key-value` pair written in place of each datetime tag.
struct Replacements {
    date: String,
    time: String,
    datetime: String,
}

impl Replacements {
    fn new(clock: &dyn Clock) -> Self {
        let now = clock.now();
        let date = now.format(DATE_FORMAT).to_string();
        let time = now.format(TIME_FORMAT).to_string();
        Replacements {
            datetime: format!("{}{KEY_DELIMITER}{date}T{time}", Tag::Datetime.name()),
            date: format!("{}{KEY_DELIMITER}{date}", Tag::Date.name()),
            time: format!("{}{KEY_DELIMITER}{time}", Tag::Time.name()),
        }
    }

    /// `None` for tags that are not stamped with the time, i.e. `@TO@`.
    fn for_tag(&self, tag: Tag) -> Option<&str> {
        match tag {
            Tag::Date => Some(self.date.as_str()),
            Tag::Time => Some(self.time.as_str()),
            Tag::Datetime => Some(self.datetime.as_str()),
            Tag::To => None,
        }
    }
}

/// Earliest datetime marker in `name`, preferring the longest at a tie.
fn find_marker(name: &str) -> Option<(usize, Tag)> {
    Tag::DATETIME_TAGS
        .into_iter()
        .filter_map(|tag| name.find(tag.marker()).map(|idx| (idx, tag)))
        .min_by_key(|&(idx, _)| idx)
}

/// Replace every datetime marker in `name`, padding the replacement with
/// underscores so the pair stays delimited from its neighbours.
fn substitute_in_name(name: &str, replacements: &Replacements) -> String {
    let mut out = String::with_capacity(name.len() + 16);
    let mut rest = name;

    while let Some((idx, tag)) = find_marker(rest) {
        let before = &rest[..idx];
        let after = &rest[idx + tag.marker().len()..];
        let Some(replacement) = replacements.for_tag(tag) else {
            out.push_str(&rest[..idx + tag.marker().len()]);
            rest = after;
            continue;
        };

        out.push_str(before);
        if !out.is_empty() && !out.ends_with(PAIR_DELIMITER) {
            out.push(PAIR_DELIMITER);
        }
        out.push_str(replacement);
        if !after.is_empty() && !after.starts_with(PAIR_DELIMITER) {
            out.push(PAIR_DELIMITER);
        }
        rest = after;
    }
    out.push_str(rest);
    out
}

/// Rewrite datetime tags in place. All names share one timestamp.
pub fn update_names_with_datetime(names: &mut [String], clock: &dyn Clock) {
    let replacements = Replacements::new(clock);
    for name in names.iter_mut() {
        if find_marker(name).is_none() {
            continue;
        }
        let updated = substitute_in_name(name, &replacements);
        tracing::debug!(from = %name, to = %updated, "substituted datetime tag");
        *name = updated;
    }
}

/// Owned variant of [`update_names_with_datetime`].
pub fn substitute_datetime_tags(mut names: Vec<String>, clock: &dyn Clock) -> Vec<String> {
    update_names_with_datetime(&mut names, clock);
    names
}
