//! Provider abstraction for report sources.
//!
//! This module defines the [`ReportProvider`] trait, the seam between the range
//! aggregator and a concrete vendor API. A provider answers for exactly one
//! calendar bucket at a time and distinguishes "nothing published for this
//! bucket" ([`BucketOutcome::NoData`]) from real failures ([`ProviderError`]).
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use chrono::NaiveDate;
//! use report_ingestor::models::{frequency::Frequency, report::ReportQuery};
//! use report_ingestor::providers::{BucketOutcome, ProviderError, ReportProvider};
//!
//! struct Fixed;
//!
//! #[async_trait]
//! impl ReportProvider for Fixed {
//!     type Row = String;
//!
//!     async fn fetch_bucket(
//!         &self,
//!         date: NaiveDate,
//!         _frequency: Frequency,
//!         _query: &ReportQuery,
//!     ) -> Result<BucketOutcome<String>, ProviderError> {
//!         Ok(BucketOutcome::Rows(vec![date.to_string()]))
//!     }
//! }
//! ```

pub mod app_store;

use async_trait::async_trait;
use chrono::NaiveDate;
use snafu::{Backtrace, Snafu};

use crate::{
    auth::AuthError,
    models::{frequency::Frequency, report::ReportQuery},
};

/// What a provider found for one bucket.
#[derive(Debug, Clone, PartialEq)]
pub enum BucketOutcome<R> {
    Rows(Vec<R>),
    /// The vendor has no report for this bucket. Not an error.
    NoData,
}

impl<R> BucketOutcome<R> {
    pub fn is_no_data(&self) -> bool {
        matches!(self, BucketOutcome::NoData)
    }
}

/// Fetches a single bucket of report rows.
///
/// `date` is a bucket start as produced by
/// [`TimeRange`](crate::models::time_range::TimeRange); implementations format
/// it for the vendor themselves.
#[async_trait]
pub trait ReportProvider: Send + Sync {
    type Row: Send;

    async fn fetch_bucket(
        &self,
        date: NaiveDate,
        frequency: Frequency,
        query: &ReportQuery,
    ) -> Result<BucketOutcome<Self::Row>, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// the signing key could not be loaded
    #[snafu(display("Failed to set up token signing: {source}"))]
    Signer {
        source: AuthError,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `ReportProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The API answered with a non-success status other than 404.
    #[snafu(display("API error ({status}): {message}"))]
    Api {
        status: u16,
        message: String,
        backtrace: Backtrace,
    },

    /// The payload claimed to be gzip but could not be inflated.
    #[snafu(display("Failed to decompress report payload: {source}"))]
    Decompress {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// The payload did not match the expected row layout.
    #[snafu(display("Failed to decode report rows: {source}"))]
    Decode {
        source: csv::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Failed to obtain bearer token: {source}"))]
    Auth {
        source: AuthError,
        backtrace: Backtrace,
    },

    /// The request parameters were invalid for this specific provider.
    #[snafu(display("Invalid parameters for provider: {message}"))]
    Validation {
        message: String,
        backtrace: Backtrace,
    },
}

impl ProviderError {
    /// HTTP status of an API rejection, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
