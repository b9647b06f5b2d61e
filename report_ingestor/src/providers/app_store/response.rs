//! Payload decoding: gzip inflation and tab-separated row parsing.

use std::io::Read;

use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use snafu::ResultExt;

use crate::providers::{DecodeSnafu, DecompressSnafu, ProviderError};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Inflates a gzip payload. Bodies without the gzip magic are returned as-is,
/// since the transport may already have decoded them.
pub fn decompress(body: &[u8]) -> Result<Vec<u8>, ProviderError> {
    if !body.starts_with(&GZIP_MAGIC) {
        return Ok(body.to_vec());
    }
    let mut inflated = Vec::new();
    GzDecoder::new(body)
        .read_to_end(&mut inflated)
        .context(DecompressSnafu)?;
    Ok(inflated)
}

/// Parses a vendor TSV payload into rows, matching columns by header name.
///
/// Quotes carry no meaning in these files, so a `"` inside a cell is kept
/// verbatim. Blank lines are skipped.
pub fn decode_rows<R: DeserializeOwned>(payload: &[u8]) -> Result<Vec<R>, ProviderError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .from_reader(payload);

    rdr.deserialize()
        .collect::<Result<Vec<R>, csv::Error>>()
        .context(DecodeSnafu)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::{Compression, write::GzEncoder};

    use super::*;
    use crate::encoding::tabular::header;
    use crate::models::sales_report::SalesReportRow;

    fn gzip(bytes: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(bytes).unwrap();
        encoder.finish().unwrap()
    }

    fn sales_payload(lines: &[&str]) -> String {
        let mut payload = header::<SalesReportRow>().join("\t");
        payload.push('\n');
        for line in lines {
            payload.push_str(line);
            payload.push('\n');
        }
        payload
    }

    const LINE: &str = "APPLE\tUS\tcom.example.app\tExample Dev\tExample \"Pro\"\t1.2\t1F\t3\t0.7\t09/08/2019\t09/08/2019\tUSD\tUS\tUSD\t1234567890\t0.99\t\t\t\t\tGames\t\tiPhone\tiOS\t\t\t\t";

    #[test]
    fn passes_plain_bodies_through() {
        assert_eq!(decompress(b"a\tb\n").unwrap(), b"a\tb\n");
    }

    #[test]
    fn inflates_gzip_bodies() {
        assert_eq!(decompress(&gzip(b"a\tb\n")).unwrap(), b"a\tb\n");
    }

    #[test]
    fn corrupt_gzip_is_a_decompress_error() {
        // gzip magic followed by an unknown compression method
        let body = [0x1f, 0x8b, 0x00, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3];
        assert!(matches!(
            decompress(&body),
            Err(ProviderError::Decompress { .. })
        ));
    }

    #[test]
    fn decodes_sales_rows_by_header() {
        let payload = sales_payload(&[LINE, LINE]);
        let rows: Vec<SalesReportRow> = decode_rows(payload.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        let row = &rows[0];
        assert_eq!(row.sku, "com.example.app");
        assert_eq!(row.title, "Example \"Pro\"");
        assert_eq!(row.units, 3);
        assert_eq!(row.developer_proceeds, 0.7);
        assert_eq!(row.apple_identifier, 1_234_567_890);
        assert_eq!(row.promo_code, "");
        assert_eq!(row.device, "iPhone");
    }

    #[test]
    fn header_only_payload_has_no_rows() {
        let rows: Vec<SalesReportRow> = decode_rows(sales_payload(&[]).as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn malformed_numbers_are_decode_errors() {
        let bad = LINE.replacen("\t3\t", "\tthree\t", 1);
        let payload = sales_payload(&[&bad]);
        assert!(matches!(
            decode_rows::<SalesReportRow>(payload.as_bytes()),
            Err(ProviderError::Decode { .. })
        ));
    }
}
