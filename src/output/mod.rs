mod inspect;
mod json;
mod table;

pub(crate) use inspect::{NameReport, print_inspect_table};
pub(crate) use json::to_json;
pub(crate) use table::{print_lines, print_tags_table};
