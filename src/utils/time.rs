//! Date formatting utilities

use chrono::{DateTime, Local};
use std::time::SystemTime;

/// Date format used for "last updated" values
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a file system timestamp as `yyyy-MM-dd` in local time
pub fn format_date(time: SystemTime) -> String {
    let date: DateTime<Local> = time.into();
    date.format(DATE_FORMAT).to_string()
}

/// Format an optional timestamp, empty when unknown
pub fn format_optional_date(time: Option<SystemTime>) -> String {
    time.map(format_date).unwrap_or_default()
}
