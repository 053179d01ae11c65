use crate::invariants::Hour;
use chrono::{NaiveDate, NaiveTime, Timelike};
use csv::{ReaderBuilder, StringRecord};
use regex::Regex;
use std::sync::LazyLock;

static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(jpg|gif|png)$").expect("valid image pattern"));
static BROWSER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Firefox|Chrome|Internet Explorer|Safari").expect("valid browser pattern")
});
// Timestamp shape for log rows: 01/31/2024 13:05:59
static TIMESTAMP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})\s+([0-9]{1,2}):([0-9]{1,2}):([0-9]{1,2})$",
    )
    .expect("valid timestamp pattern")
});

/// Splits a fetched body into CSV records. No header row, any field count.
pub fn rows(body: &str) -> impl Iterator<Item = csv::Result<StringRecord>> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes())
        .into_records()
}

pub fn is_image_path(path: &str) -> bool {
    IMAGE_PATTERN.is_match(path)
}

/// First recognised browser in the user agent, exactly as spelled there.
pub fn detect_browser(user_agent: &str) -> Option<&str> {
    BROWSER_PATTERN.find(user_agent).map(|m| m.as_str())
}

/// Hour of day from `MM/DD/YYYY HH:MM:SS`. Out-of-range fields, impossible
/// calendar dates and leap seconds are rejected.
pub fn parse_hour(timestamp: &str) -> Option<Hour> {
    let caps = TIMESTAMP_PATTERN.captures(timestamp)?;
    let field = |i: usize| caps[i].parse::<u32>().ok();
    let year = i32::try_from(field(3)?).ok().filter(|y| *y >= 1)?;
    NaiveDate::from_ymd_opt(year, field(1)?, field(2)?)?;
    let time = NaiveTime::from_hms_opt(field(4)?, field(5)?, field(6)?)?;
    Hour::try_from(time.hour()).ok()
}
