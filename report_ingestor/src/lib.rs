//! Fetches App Store Connect reports over arbitrary date spans.
//!
//! The vendor only publishes reports per fixed calendar bucket (day, week,
//! month, year). This crate walks the buckets covering a span with
//! [`TimeRange`](models::time_range::TimeRange), fetches each through a
//! [`ReportProvider`](providers::ReportProvider), concatenates the rows with
//! [`fetch_range`](requests::fetch_range), and renders the result as JSON, CSV
//! or TSV through [`Encodable`](encoding::Encodable).

pub mod auth;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod encoding;
pub mod models;
pub mod providers;
pub mod requests;
