use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Store schema – shared by the generator (writer) and the loader (reader)
// ---------------------------------------------------------------------------

/// Logical type of a store column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Integer => write!(f, "int64"),
            ColumnKind::Text => write!(f, "string"),
        }
    }
}

/// Column names and types of `flights.csv`, in file order.
pub const SCHEMA: [(&str, ColumnKind); 3] = [
    ("year", ColumnKind::Integer),
    ("month", ColumnKind::Text),
    ("passengers", ColumnKind::Integer),
];

/// Column names only, in file order.
pub fn column_names() -> Vec<String> {
    SCHEMA.iter().map(|(name, _)| name.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Sample – one complete observation
// ---------------------------------------------------------------------------

/// One monthly observation. Field order is the on-disk column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub year: i32,
    /// Full English month name, e.g. `"January"`.
    pub month: String,
    /// May be negative: the synthetic series is not clamped.
    pub passengers: i64,
}

// ---------------------------------------------------------------------------
// RawRow / RawTable – the store as read, before cleaning
// ---------------------------------------------------------------------------

/// A row as read from the store. Empty cells deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRow {
    pub year: Option<i32>,
    pub month: Option<String>,
    pub passengers: Option<i64>,
}

impl RawRow {
    /// Convert to a [`Sample`] if every field is present.
    pub fn complete(self) -> Option<Sample> {
        Some(Sample {
            year: self.year?,
            month: self.month.filter(|m| !m.is_empty())?,
            passengers: self.passengers?,
        })
    }

    /// Whether the cell of the named schema column is missing.
    pub fn is_missing(&self, column: &str) -> bool {
        match column {
            "year" => self.year.is_none(),
            "month" => self.month.as_deref().map_or(true, str::is_empty),
            "passengers" => self.passengers.is_none(),
            _ => true,
        }
    }
}

/// The loaded store: rows plus the header as found in the file.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
    pub columns: Vec<String>,
}

impl RawTable {
    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }
}

// ---------------------------------------------------------------------------
// Dataset – cleaned samples
// ---------------------------------------------------------------------------

/// Cleaned dataset: no missing fields, file order preserved.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.samples.len(), SCHEMA.len())
    }

    /// Passenger counts as floats, for the statistics routines.
    pub fn passengers(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.passengers as f64).collect()
    }
}

/// A sample together with its first-of-month calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedSample {
    pub date: NaiveDate,
    pub sample: Sample,
}
