use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int32Array, Int64Array, StringArray, UInt64Array};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::chart::{ChartSpec, build_charts};
use crate::data::calendar::with_dates;
use crate::data::generator::GenerateOutcome;
use crate::data::model::{Dataset, RawRow, SCHEMA};
use crate::stats::{Describe, YearSummary};

const OBSERVATIONS: [&str; 2] = [
    "Observation: 'avg' rises nearly linearly across the years, reflecting the trend.",
    "Observation: 'std_dev' shows consistent seasonal variability (~60-90 passengers).",
];

const FINDINGS: [&str; 3] = [
    "1. Upward Trend: Average monthly passengers increase steadily year over year.",
    "2. Seasonality: Histogram and std_dev confirm regular peaks & troughs each year.",
    "3. Variability: Scatter plot shows spread around the trend line due to seasonal + noise.",
];

// ---------------------------------------------------------------------------
// Report – everything a run produced
// ---------------------------------------------------------------------------

/// Non-null count and logical type of one schema column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub non_null: usize,
    pub dtype: String,
}

/// Output of one pipeline run, consumed by the console printer and the
/// chart windows.
#[derive(Debug, Clone)]
pub struct Report {
    pub store_path: PathBuf,
    pub generated: GenerateOutcome,
    pub loaded_shape: (usize, usize),
    /// First rows of the store as loaded, before cleaning.
    pub head: Vec<RawRow>,
    pub column_info: Vec<ColumnInfo>,
    pub missing: Vec<(String, usize)>,
    pub cleaned_shape: (usize, usize),
    pub describe: Describe,
    pub yearly: Vec<YearSummary>,
    /// Cleaned rows the charts are drawn from.
    pub dataset: Dataset,
}

impl Report {
    /// Everything printed before the charts are shown.
    pub fn summary_text(&self) -> Result<String> {
        let mut out = String::new();

        if let GenerateOutcome::Generated { rows, first, last } = &self.generated {
            writeln!(
                out,
                "Synthetic {} generated: {rows} rows ({first} -> {last})\n",
                self.store_path.display()
            )?;
        }

        let (rows, cols) = self.loaded_shape;
        writeln!(
            out,
            "Loaded '{}': {rows} rows, {cols} columns\n",
            self.store_path.display()
        )?;

        writeln!(out, ">>> First {} rows:", self.head.len())?;
        writeln!(out, "{}\n", pretty_format_batches(&[head_batch(&self.head)?])?)?;

        writeln!(out, ">>> Columns:")?;
        writeln!(out, "{}\n", pretty_format_batches(&[info_batch(&self.column_info)?])?)?;

        writeln!(out, ">>> Missing values by column:")?;
        writeln!(out, "{}\n", pretty_format_batches(&[missing_batch(&self.missing)?])?)?;

        let (rows, cols) = self.cleaned_shape;
        writeln!(out, "After cleaning: {rows} rows, {cols} columns\n")?;

        writeln!(out, ">>> Descriptive statistics (passengers):")?;
        writeln!(out, "{}\n", pretty_format_batches(&[describe_batch(&self.describe)?])?)?;

        writeln!(out, ">>> Yearly summary:")?;
        writeln!(out, "{}\n", pretty_format_batches(&[yearly_batch(&self.yearly)?])?)?;

        for line in OBSERVATIONS {
            writeln!(out, "{line}")?;
        }
        Ok(out)
    }

    /// Print the pre-chart summary to stdout.
    pub fn print_summary(&self) -> Result<()> {
        print!("{}", self.summary_text().context("formatting report")?);
        Ok(())
    }

    /// Line, bar, histogram and scatter charts. Fails on the first row whose
    /// month name has no calendar date.
    pub fn charts(&self, bins: usize) -> Result<Vec<ChartSpec>> {
        let dated = with_dates(&self.dataset)?;
        Ok(build_charts(&dated, &self.yearly, bins))
    }

    /// Closing narrative, printed after the charts.
    pub fn findings_text() -> String {
        let mut out = String::from("\n===== Findings & Observations =====\n");
        for line in FINDINGS {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("====================================\n");
        out
    }

    pub fn print_findings(&self) {
        print!("{}", Self::findings_text());
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

fn head_batch(rows: &[RawRow]) -> Result<RecordBatch> {
    let year: Int32Array = rows.iter().map(|r| r.year).collect();
    let month: StringArray = rows.iter().map(|r| r.month.as_deref()).collect();
    let passengers: Int64Array = rows.iter().map(|r| r.passengers).collect();
    Ok(RecordBatch::try_from_iter(vec![
        (SCHEMA[0].0, Arc::new(year) as ArrayRef),
        (SCHEMA[1].0, Arc::new(month) as ArrayRef),
        (SCHEMA[2].0, Arc::new(passengers) as ArrayRef),
    ])?)
}

fn info_batch(info: &[ColumnInfo]) -> Result<RecordBatch> {
    let name: StringArray = info.iter().map(|c| Some(c.name.as_str())).collect();
    let non_null: UInt64Array = info.iter().map(|c| Some(c.non_null as u64)).collect();
    let dtype: StringArray = info.iter().map(|c| Some(c.dtype.as_str())).collect();
    Ok(RecordBatch::try_from_iter(vec![
        ("column", Arc::new(name) as ArrayRef),
        ("non_null", Arc::new(non_null) as ArrayRef),
        ("dtype", Arc::new(dtype) as ArrayRef),
    ])?)
}

fn missing_batch(missing: &[(String, usize)]) -> Result<RecordBatch> {
    let name: StringArray = missing.iter().map(|(c, _)| Some(c.as_str())).collect();
    let count: UInt64Array = missing.iter().map(|(_, n)| Some(*n as u64)).collect();
    Ok(RecordBatch::try_from_iter(vec![
        ("column", Arc::new(name) as ArrayRef),
        ("missing", Arc::new(count) as ArrayRef),
    ])?)
}

fn describe_batch(describe: &Describe) -> Result<RecordBatch> {
    let entries = describe.entries();
    let stat: StringArray = entries.iter().map(|(k, _)| Some(*k)).collect();
    let value: Float64Array = entries.iter().map(|(_, v)| Some(*v)).collect();
    Ok(RecordBatch::try_from_iter(vec![
        ("statistic", Arc::new(stat) as ArrayRef),
        ("passengers", Arc::new(value) as ArrayRef),
    ])?)
}

fn yearly_batch(yearly: &[YearSummary]) -> Result<RecordBatch> {
    let year: Int32Array = yearly.iter().map(|y| Some(y.year)).collect();
    let avg: Float64Array = yearly.iter().map(|y| Some(y.avg)).collect();
    let median: Float64Array = yearly.iter().map(|y| Some(y.median)).collect();
    let std_dev: Float64Array = yearly.iter().map(|y| Some(y.std_dev)).collect();
    let count: UInt64Array = yearly.iter().map(|y| Some(y.count as u64)).collect();
    Ok(RecordBatch::try_from_iter(vec![
        ("year", Arc::new(year) as ArrayRef),
        ("avg", Arc::new(avg) as ArrayRef),
        ("median", Arc::new(median) as ArrayRef),
        ("std_dev", Arc::new(std_dev) as ArrayRef),
        ("count", Arc::new(count) as ArrayRef),
    ])?)
}
