use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    models::{report::ReportQuery, response::ReportResponse, time_range::TimeRange},
    providers::{BucketOutcome, ProviderError, ReportProvider},
};

/// A bucket fetch failed part way through a range.
///
/// Rows gathered from the buckets before `bucket` are kept in `partial`.
/// Buckets after it were never requested.
#[derive(Debug, Error)]
#[error("Fetching bucket {bucket} failed after {} rows", .partial.len())]
pub struct RangeFetchError<R> {
    pub bucket: NaiveDate,
    pub partial: ReportResponse<R>,
    #[source]
    pub source: ProviderError,
}

impl<R> RangeFetchError<R> {
    pub fn into_parts(self) -> (ReportResponse<R>, ProviderError) {
        (self.partial, self.source)
    }
}

/// Fetches every bucket of `range`, one at a time and in order, and
/// concatenates the rows.
///
/// Buckets the provider reports as [`BucketOutcome::NoData`] contribute
/// nothing. The first error stops the walk.
pub async fn fetch_range<P>(
    provider: &P,
    mut range: TimeRange,
    query: &ReportQuery,
) -> Result<ReportResponse<P::Row>, RangeFetchError<P::Row>>
where
    P: ReportProvider + ?Sized,
{
    let frequency = range.frequency();
    let mut response = ReportResponse::new();

    while range.advance() {
        let Some(bucket) = range.current() else {
            break;
        };
        match provider.fetch_bucket(bucket, frequency, query).await {
            Ok(BucketOutcome::Rows(rows)) => response.extend(rows),
            Ok(BucketOutcome::NoData) => continue,
            Err(source) => {
                return Err(RangeFetchError {
                    bucket,
                    partial: response,
                    source,
                });
            }
        }
    }

    Ok(response)
}
