pub mod calendar;
pub mod frequency;
pub mod range_token;
pub mod raw_report;
pub mod report;
pub mod response;
pub mod sales_report;
pub mod time_range;
