use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    encoding::Encoding,
    models::report::{FinanceReportType, ReportSubType, ReportType},
};

#[derive(Debug, Parser)]
#[command(name = "report-ingestor", author, version, about)]
pub struct Cli {
    /// Path to the config file (report_ingestor.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the credentials YAML file
    #[arg(short = 'c', long, global = true)]
    pub credentials: Option<PathBuf>,

    /// Date or range: YYYY, YYYY-MM, YYYY-MM-DD, YYYY-MM-Nw, or START:END.
    /// Defaults to yesterday
    #[arg(short = 'd', long = "date", global = true)]
    pub date: Option<String>,

    /// Output format: json, csv or tsv
    #[arg(short = 'o', long = "output", default_value = "json", global = true)]
    pub output: Encoding,

    /// Write to this file instead of stdout
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download Sales and Trends reports for every bucket of the range
    Sales {
        /// Report type. Only `sales` rows can be decoded
        #[arg(long, default_value = "sales")]
        report_type: ReportType,

        /// Report sub-type. Only `summary` rows can be decoded
        #[arg(long, default_value = "summary")]
        sub_type: ReportSubType,
    },

    /// Download the finance report for the month the range starts in
    Finance {
        /// Two-letter region code (e.g. "US", "EU", "ZZ")
        #[arg(long, default_value = "US")]
        region: String,

        /// Report type (financial, finance-detail)
        #[arg(long, default_value = "financial")]
        report_type: FinanceReportType,
    },
}
