//! Formatting and validation of NeuroBlueprint subject / session names.
//!
//! Names look like `sub-001_ses-002_date-20240101`: `key-value` pairs joined
//! by underscores, where the first key is the active prefix (`sub` or `ses`).
//! The engine expands `@TO@` ranges, substitutes `@DATE@`, `@TIME@` and
//! `@DATETIME@` tags and rejects any batch that would produce inconsistent
//! folder names. It performs no I/O.

pub mod clock;
pub mod consts;
pub mod error;
pub mod names;

pub use clock::{Clock, FixedClock, SystemClock, Timezone};
pub use error::{FormatError, KeyError, NameError, RangeError};
pub use names::{
    ExtractOptions, ExtractedValue, NameInput, Prefix, Tag, check_and_format_names,
    check_and_format_names_with_clock, get_value_from_key, get_values_from_batch,
    num_leading_zeros, substitute_datetime_tags, tags, update_names_with_datetime,
    update_names_with_range_to_flag,
};
