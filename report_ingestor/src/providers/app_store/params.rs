//! Query parameters for the `salesReports` and `financeReports` endpoints.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::models::{
    calendar::format_for_query,
    frequency::Frequency,
    report::{FinanceReportType, ReportQuery},
};

/// Ordered `filter[...]` parameters, serialized into the query string as-is.
pub type QueryParams = IndexMap<&'static str, String>;

pub const VENDOR_NUMBER: &str = "filter[vendorNumber]";

pub fn sales_report_params(
    date: NaiveDate,
    frequency: Frequency,
    query: &ReportQuery,
    version: Option<&str>,
) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("filter[frequency]", frequency.as_str().to_string());
    params.insert("filter[reportDate]", format_for_query(date, frequency));
    params.insert("filter[reportType]", query.report_type.as_str().to_string());
    params.insert("filter[reportSubType]", query.sub_type.as_str().to_string());
    if let Some(version) = version {
        params.insert("filter[version]", version.to_string());
    }
    params
}

/// Finance reports are only published per fiscal month, so `date` is always
/// formatted monthly.
pub fn finance_report_params(
    date: NaiveDate,
    region_code: &str,
    report_type: FinanceReportType,
) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("filter[regionCode]", region_code.to_uppercase());
    params.insert("filter[reportDate]", format_for_query(date, Frequency::Monthly));
    params.insert("filter[reportType]", report_type.as_str().to_string());
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::{ReportSubType, ReportType};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekly_sales_params_use_the_sunday() {
        let params = sales_report_params(
            day(2019, 9, 11),
            Frequency::Weekly,
            &ReportQuery::default(),
            None,
        );
        let pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                ("filter[frequency]", "WEEKLY"),
                ("filter[reportDate]", "2019-09-08"),
                ("filter[reportType]", "SALES"),
                ("filter[reportSubType]", "SUMMARY"),
            ]
        );
    }

    #[test]
    fn version_is_only_sent_when_set() {
        let query = ReportQuery::new(ReportType::Subscription, ReportSubType::Summary);
        let params = sales_report_params(day(2019, 9, 1), Frequency::Monthly, &query, Some("1_2"));
        assert_eq!(params["filter[reportDate]"], "2019-09");
        assert_eq!(params["filter[reportType]"], "SUBSCRIPTION");
        assert_eq!(params["filter[version]"], "1_2");
    }

    #[test]
    fn finance_params_are_monthly() {
        let params = finance_report_params(day(2019, 3, 17), "us", FinanceReportType::Financial);
        assert_eq!(params["filter[regionCode]"], "US");
        assert_eq!(params["filter[reportDate]"], "2019-03");
        assert_eq!(params["filter[reportType]"], "FINANCIAL");
        assert!(!params.contains_key(VENDOR_NUMBER));
    }
}
