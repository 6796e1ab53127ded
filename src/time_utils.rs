use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

/// Current calendar date in the local timezone, falling back to UTC when the
/// local offset cannot be determined (e.g. in multi-threaded test runners).
pub fn today_local() -> Date {
    let now = OffsetDateTime::now_utc();
    match UtcOffset::current_local_offset() {
        Ok(offset) => now.to_offset(offset).date(),
        Err(_) => now.date(),
    }
}

/// Display form used across the UI, e.g. "15 Dec 2025".
pub fn format_date(date: Date) -> String {
    let format = format_description!("[day padding:none] [month repr:short] [year]");
    date.format(&format).unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn formats_dates_with_short_month() {
        assert_eq!(format_date(date!(2025 - 12 - 15)), "15 Dec 2025");
        assert_eq!(format_date(date!(2023 - 01 - 15)), "15 Jan 2023");
        assert_eq!(format_date(date!(2025 - 12 - 05)), "5 Dec 2025");
    }
}
