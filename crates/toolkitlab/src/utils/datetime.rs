//! Human-readable date rendering
//!
//! Timestamps are rendered in the US English layout the toolkit has always
//! shown (`1/18/2018, 1:30:22 AM`), pinned to UTC so output is reproducible.

use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

const DATE_TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[month padding:none]/[day padding:none]/[year], [hour repr:12 padding:none]:[minute]:[second] [period] UTC"
);

const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

/// Convert Unix epoch seconds (possibly fractional) to an instant.
///
/// Returns `None` for non-finite values and instants `time` cannot represent.
pub(crate) fn from_unix_seconds(seconds: f64) -> Option<OffsetDateTime> {
    if !seconds.is_finite() {
        return None;
    }
    // Millisecond precision, like the browser Date the values come from
    let millis = (seconds * 1000.0).trunc() as i128;
    OffsetDateTime::from_unix_timestamp_nanos(millis.checked_mul(1_000_000)?).ok()
}

/// Format an instant as `M/D/YYYY, h:mm:ss AM UTC`.
pub(crate) fn format_date_time(instant: OffsetDateTime) -> Option<String> {
    instant
        .to_offset(time::UtcOffset::UTC)
        .format(DATE_TIME_FORMAT)
        .ok()
}

/// Format a calendar date as `M/D/YYYY`.
pub(crate) fn format_date(date: Date) -> Option<String> {
    date.format(DATE_FORMAT).ok()
}
