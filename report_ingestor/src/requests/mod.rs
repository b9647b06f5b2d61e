mod range_request;
pub use range_request::{RangeFetchError, fetch_range};
