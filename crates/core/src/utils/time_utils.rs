use chrono::{Datelike, Duration, NaiveDate, Utc};

/// Returns the Monday of the ISO week containing `date`.
///
/// Weekly budgets are keyed by this date, so any day of a week maps to the
/// same stored budget. Dates in the first, partial week of the supported
/// calendar have no representable Monday and map to themselves.
pub fn week_start_for(date: NaiveDate) -> NaiveDate {
    let offset = i64::from(date.weekday().num_days_from_monday());
    date.checked_sub_signed(Duration::days(offset)).unwrap_or(date)
}

/// Today's calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
