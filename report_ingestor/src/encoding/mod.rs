//! Output encodings for assembled reports.
//!
//! [`Encodable`] is implemented for [`ReportResponse`] of any [`TabularRow`]
//! (JSON, CSV and TSV) and for [`RawReport`] (JSON and TSV only). Asking for an
//! encoding a payload has no renderer for returns
//! [`EncodingError::Unsupported`] before any output is produced.

pub mod delimited;
pub mod tabular;

use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

use crate::models::{raw_report::RawReport, response::ReportResponse};
use tabular::TabularRow;

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("Unsupported encoding: {encoding}")]
    Unsupported { encoding: Encoding },

    #[error("Invalid output format `{0}`: expected json, csv or tsv")]
    UnknownFormat(String),

    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),

    #[error("Delimited serialization failed")]
    Csv(#[from] csv::Error),

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Output format selector. `None` is the unset value and renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    None,
    Json,
    Csv,
    Tsv,
}

impl Encoding {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Encoding::None => "none",
            Encoding::Json => "json",
            Encoding::Csv => "csv",
            Encoding::Tsv => "tsv",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Encoding::Json),
            "csv" => Ok(Encoding::Csv),
            "tsv" => Ok(Encoding::Tsv),
            _ => Err(EncodingError::UnknownFormat(s.to_string())),
        }
    }
}

/// Something that can be rendered into one of the output encodings.
pub trait Encodable {
    fn to_encoding(&self, encoding: Encoding) -> Result<Vec<u8>, EncodingError>;
}

impl<R> Encodable for ReportResponse<R>
where
    R: TabularRow + Serialize,
{
    fn to_encoding(&self, encoding: Encoding) -> Result<Vec<u8>, EncodingError> {
        match encoding {
            Encoding::Json => Ok(serde_json::to_vec_pretty(self)?),
            Encoding::Csv => delimited::encode_rows(self.rows(), delimited::CSV_DELIMITER),
            Encoding::Tsv => delimited::encode_rows(self.rows(), delimited::TSV_DELIMITER),
            Encoding::None => Err(EncodingError::Unsupported { encoding }),
        }
    }
}

impl Encodable for RawReport {
    fn to_encoding(&self, encoding: Encoding) -> Result<Vec<u8>, EncodingError> {
        match encoding {
            Encoding::Json => Ok(serde_json::to_vec_pretty(self)?),
            // finance payloads are already tab separated
            Encoding::Tsv => Ok(self.as_str().as_bytes().to_vec()),
            Encoding::Csv | Encoding::None => Err(EncodingError::Unsupported { encoding }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sales_report::{SalesReportRow, fixtures::sales_row};

    fn response() -> ReportResponse<SalesReportRow> {
        vec![sales_row("sku-1", 2), sales_row("sku-2", 5)].into()
    }

    #[test]
    fn parses_output_formats() {
        assert_eq!("JSON".parse::<Encoding>().unwrap(), Encoding::Json);
        assert_eq!("csv".parse::<Encoding>().unwrap(), Encoding::Csv);
        assert_eq!(" tsv".parse::<Encoding>().unwrap(), Encoding::Tsv);
        assert!(matches!(
            "xml".parse::<Encoding>(),
            Err(EncodingError::UnknownFormat(_))
        ));
    }

    #[test]
    fn unset_encoding_is_unsupported() {
        let err = response().to_encoding(Encoding::None).unwrap_err();
        assert!(matches!(
            err,
            EncodingError::Unsupported {
                encoding: Encoding::None
            }
        ));
        assert_eq!(err.to_string(), "Unsupported encoding: none");
    }

    #[test]
    fn json_round_trips() {
        let original = response();
        let bytes = original.to_encoding(Encoding::Json).unwrap();
        let decoded: ReportResponse<SalesReportRow> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, original);

        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["SKU"], "sku-2");
    }

    #[test]
    fn csv_and_tsv_have_header_plus_one_line_per_row() {
        for (encoding, delimiter) in [(Encoding::Csv, ','), (Encoding::Tsv, '\t')] {
            let text = String::from_utf8(response().to_encoding(encoding).unwrap()).unwrap();
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), 3, "{encoding}");
            assert!(lines[0].starts_with(&format!("Provider{delimiter}Provider Country{delimiter}SKU")));
            assert!(lines[2].contains("sku-2"));
        }
    }

    #[test]
    fn empty_response_still_has_header() {
        let empty = ReportResponse::<SalesReportRow>::new();
        let text = String::from_utf8(empty.to_encoding(Encoding::Csv).unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&empty.to_encoding(Encoding::Json).unwrap())
                .unwrap(),
            serde_json::json!([])
        );
    }

    #[test]
    fn raw_report_encodings() {
        let raw = RawReport::from_bytes(b"Start Date\tEnd Date\n01/01/2019\t01/31/2019\n");
        assert_eq!(raw.to_encoding(Encoding::Tsv).unwrap(), raw.as_str().as_bytes());

        let json: serde_json::Value =
            serde_json::from_slice(&raw.to_encoding(Encoding::Json).unwrap()).unwrap();
        assert_eq!(json["report"], raw.as_str());

        assert!(matches!(
            raw.to_encoding(Encoding::Csv),
            Err(EncodingError::Unsupported {
                encoding: Encoding::Csv
            })
        ));
    }
}
