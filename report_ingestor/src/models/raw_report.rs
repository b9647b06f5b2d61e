use serde::{Deserialize, Serialize};

/// A report payload kept as text, for reports whose layout is not decoded
/// into rows (finance reports carry trailing summary lines after the data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReport {
    pub report: String,
}

impl RawReport {
    /// Builds a report from decompressed payload bytes; invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            report: String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.report
    }
}
