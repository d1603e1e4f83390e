/// Separates `key-value` pairs within a name.
pub const PAIR_DELIMITER: char = '_';

/// Separates a key from its value.
pub const KEY_DELIMITER: char = '-';

/// chrono format for the value written by `@DATE@`
pub const DATE_FORMAT: &str = "%Y%m%d";

/// chrono format for the value written by `@TIME@`
pub const TIME_FORMAT: &str = "%H%M%S";

/// Most names a single `@TO@` range may expand into.
pub const MAX_RANGE_LEN: u64 = 10_000;
