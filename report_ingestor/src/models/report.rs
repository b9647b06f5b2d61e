//! Report selectors understood by the Sales and Trends / Finance endpoints.
//!
//! Each selector renders to the exact string the vendor expects in its
//! `filter[...]` query parameter and parses from a relaxed, case-insensitive
//! spelling for CLI use (`pre-order`, `pre_order` and `PRE_ORDER` are equal).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid {kind} `{value}`")]
pub struct SelectorParseError {
    pub kind: &'static str,
    pub value: String,
}

fn normalize(s: &str) -> String {
    s.trim().to_uppercase().replace('-', "_")
}

/// `filter[reportType]` for Sales and Trends reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    Sales,
    PreOrder,
    Newsstand,
    Subscription,
    SubscriptionEvent,
    Subscriber,
}

impl ReportType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReportType::Sales => "SALES",
            ReportType::PreOrder => "PRE_ORDER",
            ReportType::Newsstand => "NEWSSTAND",
            ReportType::Subscription => "SUBSCRIPTION",
            ReportType::SubscriptionEvent => "SUBSCRIPTION_EVENT",
            ReportType::Subscriber => "SUBSCRIBER",
        }
    }
}

impl FromStr for ReportType {
    type Err = SelectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "SALES" => Ok(ReportType::Sales),
            "PRE_ORDER" | "PREORDER" => Ok(ReportType::PreOrder),
            "NEWSSTAND" => Ok(ReportType::Newsstand),
            "SUBSCRIPTION" => Ok(ReportType::Subscription),
            "SUBSCRIPTION_EVENT" => Ok(ReportType::SubscriptionEvent),
            "SUBSCRIBER" => Ok(ReportType::Subscriber),
            _ => Err(SelectorParseError {
                kind: "report type",
                value: s.to_string(),
            }),
        }
    }
}

/// `filter[reportSubType]` for Sales and Trends reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportSubType {
    Summary,
    Detailed,
    OptIn,
}

impl ReportSubType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReportSubType::Summary => "SUMMARY",
            ReportSubType::Detailed => "DETAILED",
            ReportSubType::OptIn => "OPT_IN",
        }
    }
}

impl FromStr for ReportSubType {
    type Err = SelectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "SUMMARY" => Ok(ReportSubType::Summary),
            "DETAILED" => Ok(ReportSubType::Detailed),
            "OPT_IN" | "OPTIN" => Ok(ReportSubType::OptIn),
            _ => Err(SelectorParseError {
                kind: "report sub-type",
                value: s.to_string(),
            }),
        }
    }
}

/// `filter[reportType]` for Finance reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinanceReportType {
    Financial,
    FinanceDetail,
}

impl FinanceReportType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FinanceReportType::Financial => "FINANCIAL",
            FinanceReportType::FinanceDetail => "FINANCE_DETAIL",
        }
    }
}

impl FromStr for FinanceReportType {
    type Err = SelectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "FINANCIAL" => Ok(FinanceReportType::Financial),
            "FINANCE_DETAIL" => Ok(FinanceReportType::FinanceDetail),
            _ => Err(SelectorParseError {
                kind: "finance report type",
                value: s.to_string(),
            }),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(ReportType, ReportSubType, FinanceReportType);

/// The pair of selectors that identifies which Sales and Trends report to
/// pull for every bucket of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    pub report_type: ReportType,
    pub sub_type: ReportSubType,
}

impl ReportQuery {
    pub const fn new(report_type: ReportType, sub_type: ReportSubType) -> Self {
        Self {
            report_type,
            sub_type,
        }
    }
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self::new(ReportType::Sales, ReportSubType::Summary)
    }
}
