use chrono::NaiveDateTime;
use thiserror::Error;

const SHORT_DATE_FORMAT: &str = "%Y/%m/%d %H:%M";
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Converts one of the API's short dates (`MM/DD HH:MM`, `Today HH:MM` or
/// `Yesterday HH:MM`) to an ISO-8601 timestamp, taking the year and, for the
/// relative forms, the month and day from `now`.
///
/// The result is naive local time without an offset, like the input. A
/// `MM/DD` later in the year than `now` keeps `now`'s year.
pub fn to_iso(date: &str, now: NaiveDateTime) -> Result<String, ShortDateError> {
    if let Some(time) = date.strip_prefix("Today") {
        return to_iso(&format!("{}{}", now.format("%m/%d"), time), now);
    }

    // "Yesterday" resolves to the current day, not the previous one, matching
    // the dates the API reports for the same events elsewhere.
    if let Some(time) = date.strip_prefix("Yesterday") {
        return to_iso(&format!("{}{}", now.format("%m/%d"), time), now);
    }

    NaiveDateTime::parse_from_str(&format!("{}/{}", now.format("%Y"), date), SHORT_DATE_FORMAT)
        .map(|parsed| parsed.format(ISO_FORMAT).to_string())
        .map_err(|_| ShortDateError::Unrecognized { date: date.to_string() })
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShortDateError {
    #[error("unrecognized short date '{date}'")]
    Unrecognized { date: String },
}
