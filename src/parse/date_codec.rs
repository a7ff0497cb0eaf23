use chrono::{Datelike, NaiveDate};

/// Why a date string was rejected. One variant per rejection point of the
/// scanner, so diagnostics can say what was expected vs. found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("expected at least 8 characters of yyyy/(m)m/(d)d, got {0}")]
    TooShort(usize),
    #[error("year field contains a non-digit character")]
    YearNotNumeric,
    #[error("month field contains a character that is neither a digit nor '/'")]
    MonthNotNumeric,
    #[error("no month digits before the second '/'")]
    MissingMonth,
    #[error("day field contains a non-digit character")]
    DayNotNumeric,
    #[error("no day digits after the second '/'")]
    MissingDay,
    #[error("no such calendar date: {year}/{month}/{day}")]
    OutOfCalendar { year: i32, month: u32, day: u32 },
}

/// Parse a date in `yyyy/(m)m/(d)d` format: exactly 4 year digits, then
/// 1 or 2 digits for month and day, mixed padding allowed (`2025/5/03` is
/// fine). Calendrically invalid dates are rejected outright, never clamped
/// or normalized.
///
/// Two scanner quirks are contract: the byte after the year and the byte
/// after a 2-digit month are skipped without being checked for `/`.
pub fn parse_display_date(text: &str) -> Result<NaiveDate, DateParseError> {
    let bytes = text.as_bytes();
    if bytes.len() < 8 {
        return Err(DateParseError::TooShort(bytes.len()));
    }

    let mut year: i32 = 0;
    for &b in &bytes[..4] {
        if !b.is_ascii_digit() {
            return Err(DateParseError::YearNotNumeric);
        }
        year = year * 10 + i32::from(b - b'0');
    }

    // bytes[4] is skipped unchecked
    let mut month: u32 = 0;
    let mut month_digits = 0;
    let mut i = 5;
    while i < 7 {
        let b = bytes[i];
        if b.is_ascii_digit() {
            month = month * 10 + u32::from(b - b'0');
            month_digits += 1;
        } else if b == b'/' {
            break;
        } else {
            return Err(DateParseError::MonthNotNumeric);
        }
        i += 1;
    }
    if month_digits == 0 {
        return Err(DateParseError::MissingMonth);
    }

    // bytes[i] is the separator position (also unchecked); day runs to end
    let mut day: u32 = 0;
    let mut day_digits = 0;
    for &b in &bytes[i + 1..] {
        if !b.is_ascii_digit() {
            return Err(DateParseError::DayNotNumeric);
        }
        day = day.saturating_mul(10).saturating_add(u32::from(b - b'0'));
        day_digits += 1;
    }
    if day_digits == 0 {
        return Err(DateParseError::MissingDay);
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DateParseError::OutOfCalendar { year, month, day })
}

/// Render a date as `yyyy/(m)m/(d)d` with month and day not zero-padded
/// (May 3rd is `2025/5/3`). This is the UI round-trip format; the task
/// file on disk zero-pads instead (see the serializer). The two stay
/// separate on purpose.
pub fn format_display_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}
