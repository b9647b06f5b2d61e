//! Parsing of human date / date-range tokens into a [`TimeRange`].
//!
//! Accepted dates, with the frequency each one implies:
//!
//! | token        | frequency | resolves to                               |
//! |--------------|-----------|-------------------------------------------|
//! | `2019`       | yearly    | 2019-01-01                                |
//! | `2019-09`    | monthly   | 2019-09-01                                |
//! | `2019-09-10` | daily     | 2019-09-10                                |
//! | `2019-09-2w` | weekly    | 2nd week of September (day 1 + 7 days)    |
//!
//! A range is two dates of the same granularity joined by `:`. The two ends
//! may be given in either order.

use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::models::{frequency::Frequency, time_range::TimeRange};

const MAX_WEEK_OF_MONTH: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeTokenError {
    #[error("Empty date range")]
    Empty,

    #[error("Unrecognized date `{0}`: expected YYYY, YYYY-MM, YYYY-MM-DD or YYYY-MM-Nw")]
    Unrecognized(String),

    #[error("Week {week} does not exist in {year}-{month:02}")]
    WeekOutOfRange { year: i32, month: u32, week: u32 },

    #[error("Range ends `{start}` and `{end}` have different granularities")]
    MixedGranularity { start: String, end: String },
}

/// A single parsed date together with the granularity its token implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpec {
    pub date: NaiveDate,
    pub frequency: Frequency,
}

/// Parse one date token (no `:`).
pub fn parse_date_token(token: &str) -> Result<DateSpec, RangeTokenError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(RangeTokenError::Empty);
    }
    let unrecognized = || RangeTokenError::Unrecognized(token.to_string());

    if let Some(body) = token.strip_suffix(['w', 'W']) {
        let parts: Vec<&str> = body.split('-').collect();
        let [year, month, week] = parts.as_slice() else {
            return Err(unrecognized());
        };
        let year = parse_year(year).ok_or_else(unrecognized)?;
        let month: u32 = month.parse().map_err(|_| unrecognized())?;
        let week: u32 = week.parse().map_err(|_| unrecognized())?;
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(unrecognized)?;
        return week_of_month(first, week).map(|date| DateSpec {
            date,
            frequency: Frequency::Weekly,
        });
    }

    let parts: Vec<&str> = token.split('-').collect();
    let (date, frequency) = match parts.as_slice() {
        [year] => {
            let year = parse_year(year).ok_or_else(unrecognized)?;
            (NaiveDate::from_ymd_opt(year, 1, 1), Frequency::Yearly)
        }
        [year, month] => {
            let year = parse_year(year).ok_or_else(unrecognized)?;
            let month: u32 = month.parse().map_err(|_| unrecognized())?;
            (NaiveDate::from_ymd_opt(year, month, 1), Frequency::Monthly)
        }
        [year, _, _] => {
            parse_year(year).ok_or_else(unrecognized)?;
            (
                NaiveDate::parse_from_str(token, "%Y-%m-%d").ok(),
                Frequency::Daily,
            )
        }
        _ => (None, Frequency::Daily),
    };
    let date = date.ok_or_else(unrecognized)?;
    Ok(DateSpec { date, frequency })
}

/// Resolve a date or `start:end` token into the normalized
/// `(start, end, frequency)` of its range, with `start <= end`.
pub fn resolve_range_token(token: &str) -> Result<(NaiveDate, NaiveDate, Frequency), RangeTokenError> {
    let range = parse_range_token(token)?;
    Ok((range.start(), range.end(), range.frequency()))
}

/// Parse a date or range token straight into a [`TimeRange`].
pub fn parse_range_token(token: &str) -> Result<TimeRange, RangeTokenError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(RangeTokenError::Empty);
    }

    let Some((first, second)) = token.split_once(':') else {
        let spec = parse_date_token(token)?;
        return Ok(TimeRange::new(spec.date, spec.date, spec.frequency));
    };

    let start = parse_date_token(first)?;
    let end = parse_date_token(second)?;
    if start.frequency != end.frequency {
        return Err(RangeTokenError::MixedGranularity {
            start: first.trim().to_string(),
            end: second.trim().to_string(),
        });
    }
    Ok(TimeRange::sorted(start.date, end.date, start.frequency))
}

fn parse_year(s: &str) -> Option<i32> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn week_of_month(first: NaiveDate, week: u32) -> Result<NaiveDate, RangeTokenError> {
    use chrono::Datelike;

    let out_of_range = || RangeTokenError::WeekOutOfRange {
        year: first.year(),
        month: first.month(),
        week,
    };
    if !(1..=MAX_WEEK_OF_MONTH).contains(&week) {
        return Err(out_of_range());
    }
    let date = first + Days::new(u64::from((week - 1) * 7));
    if date.month() != first.month() {
        return Err(out_of_range());
    }
    Ok(date)
}
