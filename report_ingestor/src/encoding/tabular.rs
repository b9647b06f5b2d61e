//! Column tables for flat report rows.
//!
//! Every row shape declares one ordered list of [`Column`]s. The CSV/TSV
//! header and each row's values are both produced by walking that same list,
//! so column `i` of the header always names value `i` of every row.
//!
//! Rows are normally declared with [`report_row!`](crate::report_row), which
//! emits the struct, its serde renames and its column table from a single
//! field list.

use std::fmt;

/// A borrowed cell value, rendered as text by its [`Display`](fmt::Display)
/// impl (numbers in base-10, strings verbatim).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::UInt(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
        }
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&i64> for FieldValue<'_> {
    fn from(value: &i64) -> Self {
        FieldValue::Int(*value)
    }
}

impl From<&u64> for FieldValue<'_> {
    fn from(value: &u64) -> Self {
        FieldValue::UInt(*value)
    }
}

impl From<&f64> for FieldValue<'_> {
    fn from(value: &f64) -> Self {
        FieldValue::Float(*value)
    }
}

/// One named column and the accessor that reads it from a row.
pub struct Column<R> {
    pub name: &'static str,
    pub value: fn(&R) -> FieldValue<'_>,
}

impl<R> Column<R> {
    pub const fn new(name: &'static str, value: fn(&R) -> FieldValue<'_>) -> Self {
        Self { name, value }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column").field("name", &self.name).finish()
    }
}

/// A flat row with a fixed, declared column order.
pub trait TabularRow: Sized + 'static {
    const COLUMNS: &'static [Column<Self>];
}

/// Column names in declared order.
pub fn header<R: TabularRow>() -> Vec<&'static str> {
    R::COLUMNS.iter().map(|column| column.name).collect()
}

/// Rendered cell values of `row`, in the same order as [`header`].
pub fn values<R: TabularRow>(row: &R) -> Vec<String> {
    R::COLUMNS
        .iter()
        .map(|column| (column.value)(row).to_string())
        .collect()
}

/// Declares a report row struct together with its [`TabularRow`] column table.
///
/// Each field is written as `name: Type => "Vendor Column"`. The vendor column
/// name is used both as the serde name (TSV decoding, JSON keys) and as the
/// CSV/TSV header, and the field order is the column order.
#[macro_export]
macro_rules! report_row {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => $column:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $column)]
                pub $field: $ty,
            )+
        }

        impl $crate::encoding::tabular::TabularRow for $name {
            const COLUMNS: &'static [$crate::encoding::tabular::Column<Self>] = &[
                $(
                    $crate::encoding::tabular::Column::<Self>::new(
                        $column,
                        |row| $crate::encoding::tabular::FieldValue::from(&row.$field),
                    ),
                )+
            ];
        }
    };
}
