//! Cursor over the bucket starts of an inclusive date range.
//!
//! A [`TimeRange`] is a cheap value: to walk the same range twice, build a new
//! one. Both ends are normalized with [`bucket_start`] on construction and a
//! bucket is visited iff its start is on or before the normalized end, so a
//! partially covered trailing bucket is still visited.
//!
//! ```
//! use chrono::NaiveDate;
//! use report_ingestor::models::{frequency::Frequency, time_range::TimeRange};
//!
//! let start = NaiveDate::from_ymd_opt(2018, 12, 29).unwrap();
//! let end = NaiveDate::from_ymd_opt(2019, 2, 2).unwrap();
//! let months: Vec<_> = TimeRange::new(start, end, Frequency::Monthly).collect();
//! assert_eq!(months.len(), 3);
//! assert_eq!(months[0], NaiveDate::from_ymd_opt(2018, 12, 1).unwrap());
//! ```

use chrono::NaiveDate;

use crate::models::{
    calendar::{bucket_start, next_bucket_start},
    frequency::Frequency,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    start: NaiveDate,
    end: NaiveDate,
    frequency: Frequency,
    current: Option<NaiveDate>,
    steps: usize,
}

impl TimeRange {
    /// Creates a range over already ordered `start <= end`.
    ///
    /// Use [`TimeRange::sorted`] when the order of the two dates is not known.
    pub fn new(start: NaiveDate, end: NaiveDate, frequency: Frequency) -> Self {
        Self {
            start: bucket_start(start, frequency),
            end: bucket_start(end, frequency),
            frequency,
            current: None,
            steps: 0,
        }
    }

    /// Creates a range from two dates in either order.
    pub fn sorted(a: NaiveDate, b: NaiveDate, frequency: Frequency) -> Self {
        if a > b {
            Self::new(b, a, frequency)
        } else {
            Self::new(a, b, frequency)
        }
    }

    /// Moves to the next bucket start.
    ///
    /// The first call always succeeds and lands on the normalized start. After
    /// that, returns `false` once the next bucket would begin after the
    /// normalized end; the position is then left where it was.
    pub fn advance(&mut self) -> bool {
        let candidate = match self.current {
            None => self.start,
            Some(current) => match next_bucket_start(current, self.frequency) {
                Some(next) if next <= self.end => next,
                _ => return false,
            },
        };
        self.current = Some(candidate);
        self.steps += 1;
        true
    }

    /// Bucket start set by the last successful [`advance`](Self::advance).
    pub fn current(&self) -> Option<NaiveDate> {
        self.current
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Number of buckets visited so far.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Iterator for TimeRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() { self.current } else { None }
    }
}
