//! CSV / TSV rendering driven by a row's column table.

use super::{
    EncodingError,
    tabular::{TabularRow, header, values},
};

pub const CSV_DELIMITER: u8 = b',';
pub const TSV_DELIMITER: u8 = b'\t';

/// Writes a header line followed by one line per row.
///
/// Cells are quoted only when they contain the delimiter, a quote or a line
/// break.
pub fn encode_rows<R: TabularRow>(rows: &[R], delimiter: u8) -> Result<Vec<u8>, EncodingError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    wtr.write_record(header::<R>())?;
    for row in rows {
        wtr.write_record(values(row))?;
    }

    wtr.into_inner()
        .map_err(|e| EncodingError::Io(e.into_error()))
}
