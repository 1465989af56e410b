//! Helpers shared by the human-readable resource renderings.

use chrono::{DateTime, TimeZone};
use std::fmt::{self, Write as _};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats epoch milliseconds as `YYYY-MM-DD HH:MM:SS` in the given zone.
///
/// Values outside chrono's representable range render as the raw number.
pub fn format_millis<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    DateTime::from_timestamp_millis(millis).map_or_else(
        || millis.to_string(),
        |utc| utc.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string(),
    )
}

/// Accumulates `    <label><padding><value>` lines joined by `\n`.
pub struct FieldLines {
    width: usize,
    out: String,
}

impl FieldLines {
    pub const fn new(width: usize) -> Self {
        Self {
            width,
            out: String::new(),
        }
    }

    pub fn field(mut self, label: &str, value: impl fmt::Display) -> Self {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        let _ = write!(self.out, "    {label:<width$}{value}", width = self.width);
        self
    }

    pub fn raw(mut self, line: impl fmt::Display) -> Self {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        let _ = write!(self.out, "{line}");
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}
