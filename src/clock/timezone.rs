use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

/// Zone in which `@DATE@`, `@TIME@` and `@DATETIME@` values are stamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Timezone {
    #[default]
    Local,
    Named(Tz),
}

impl Timezone {
    /// `None`, empty or `local` give the machine timezone; `utc` / `z` and
    /// IANA names are accepted. Unknown names come back as the error.
    pub fn parse(value: Option<&str>) -> Result<Self, String> {
        let Some(raw) = value.map(str::trim) else {
            return Ok(Timezone::Local);
        };
        if raw.is_empty() || raw.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if raw.eq_ignore_ascii_case("utc") || raw.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(raw)
            .map(Timezone::Named)
            .map_err(|_| raw.to_string())
    }

    /// `utc` as read off a wall clock in this zone, with the offset in force
    /// at that instant. Daylight saving is applied, so a tag stamped in
    /// `Europe/London` in July reads one hour ahead of UTC.
    pub fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => fix_offset(utc, &Local),
            Timezone::Named(tz) => fix_offset(utc, &tz),
        }
    }

    /// Zone-free timestamp that tag values are formatted from.
    pub fn wall_clock(self, utc: DateTime<Utc>) -> NaiveDateTime {
        self.to_fixed_offset(utc).naive_local()
    }
}

fn fix_offset<Z: TimeZone>(utc: DateTime<Utc>, zone: &Z) -> DateTime<FixedOffset> {
    let zoned = utc.with_timezone(zone);
    let offset = zoned.offset().fix();
    zoned.with_timezone(&offset)
}
