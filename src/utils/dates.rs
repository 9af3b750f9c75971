// Date handling for log file names and git timestamps

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, ParseError, TimeZone};

/// File-name safe timestamp format, e.g. `2020_02_02-12_30_45`
pub const TIMESTAMP_FORMAT: &str = "%Y_%m_%d-%H_%M_%S";

/// The date format git prints in human-readable log output,
/// e.g. `Sun Feb 2 12:30:45 2020 +0200`
pub const GIT_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y %z";

/// Format a date in the file-name safe timestamp format
pub fn format_timestamp<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    date.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp previously produced by [`format_timestamp`]
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
}

/// Parse a date string as git prints it in log output
pub fn parse_git_date(text: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_str(text, GIT_DATE_FORMAT)
}

/// The current local time in the file-name safe timestamp format
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now())
}
