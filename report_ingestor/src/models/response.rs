//! Assembled result of fetching every bucket of a range.

use serde::{Deserialize, Serialize};

/// Rows from every bucket of a range, in bucket order and then in the order
/// the vendor returned them. Nothing is sorted or deduplicated.
///
/// Serializes as a plain JSON array of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportResponse<R> {
    rows: Vec<R>,
}

impl<R> ReportResponse<R> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }
}

impl<R> Default for ReportResponse<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Extend<R> for ReportResponse<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}

impl<R> FromIterator<R> for ReportResponse<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<R> From<Vec<R>> for ReportResponse<R> {
    fn from(rows: Vec<R>) -> Self {
        Self { rows }
    }
}

impl<R> IntoIterator for ReportResponse<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a ReportResponse<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
