//! Bucket boundary arithmetic on calendar dates.
//!
//! - Day: every date is its own bucket start.
//! - Week: Sunday-aligned (weekday numbering 0 = Sunday).
//! - Month: day 1 of the month.
//! - Year: left as given. The first yearly bucket keeps whatever day-of-year
//!   the caller supplied and later buckets step one calendar year from it.
//!
//! No time of day and no timezone are involved anywhere.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::models::frequency::Frequency;

const DAYS_PER_WEEK: u64 = 7;

/// Round `date` down to the start of its bucket.
pub fn bucket_start(date: NaiveDate, frequency: Frequency) -> NaiveDate {
    match frequency {
        Frequency::Daily => date,
        Frequency::Weekly => week_start(date),
        Frequency::Monthly => month_start(date),
        Frequency::Yearly => date,
    }
}

/// Start of the bucket that follows the one `date` belongs to, or `None` when
/// that bucket would begin past [`NaiveDate::MAX`].
pub fn next_bucket_start(date: NaiveDate, frequency: Frequency) -> Option<NaiveDate> {
    match frequency {
        Frequency::Daily => date.checked_add_days(Days::new(1)),
        Frequency::Weekly => week_start(date).checked_add_days(Days::new(DAYS_PER_WEEK)),
        Frequency::Monthly => month_start(date).checked_add_months(Months::new(1)),
        Frequency::Yearly => date.checked_add_months(Months::new(12)),
    }
}

/// Date string the vendor expects in `filter[reportDate]` for this frequency.
pub fn format_for_query(date: NaiveDate, frequency: Frequency) -> String {
    match frequency {
        Frequency::Daily => date.format("%Y-%m-%d").to_string(),
        Frequency::Weekly => week_start(date).format("%Y-%m-%d").to_string(),
        Frequency::Monthly => date.format("%Y-%m").to_string(),
        Frequency::Yearly => date.format("%Y").to_string(),
    }
}

// Saturates at NaiveDate::MIN, whose week begins before the supported range.
fn week_start(date: NaiveDate) -> NaiveDate {
    let since_sunday = date.weekday().num_days_from_sunday();
    date.checked_sub_days(Days::new(u64::from(since_sunday)))
        .unwrap_or(NaiveDate::MIN)
}

fn month_start(date: NaiveDate) -> NaiveDate {
    // day 1 exists in every month
    date - Days::new(u64::from(date.day0()))
}
