use std::collections::BTreeMap;

use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Scalar statistics
// ---------------------------------------------------------------------------

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator); NaN for fewer than two values.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Quantile of already-sorted values with linear interpolation between
/// closest ranks. `q` is in `[0, 1]`.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
        }
    }
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(f64::total_cmp);
    v
}

/// Median; NaN for an empty slice.
pub fn median(values: &[f64]) -> f64 {
    quantile_sorted(&sorted(values), 0.5)
}

// ---------------------------------------------------------------------------
// Describe – summary of one numeric column
// ---------------------------------------------------------------------------

/// Count, moments and five-number summary of a numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    /// `(label, value)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("count", self.count as f64),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.q50),
            ("75%", self.q75),
            ("max", self.max),
        ]
    }
}

/// Describe a numeric column. Every statistic except `count` is NaN when
/// `values` is empty.
pub fn describe(values: &[f64]) -> Describe {
    let s = sorted(values);
    Describe {
        count: s.len(),
        mean: mean(&s),
        std: std_dev(&s),
        min: s.first().copied().unwrap_or(f64::NAN),
        q25: quantile_sorted(&s, 0.25),
        q50: quantile_sorted(&s, 0.5),
        q75: quantile_sorted(&s, 0.75),
        max: s.last().copied().unwrap_or(f64::NAN),
    }
}

// ---------------------------------------------------------------------------
// YearSummary – group by year
// ---------------------------------------------------------------------------

/// Passenger statistics for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearSummary {
    pub year: i32,
    pub avg: f64,
    pub median: f64,
    /// NaN when the year has a single row.
    pub std_dev: f64,
    pub count: usize,
}

/// One summary per distinct year, ascending by year.
pub fn summarize_by_year(dataset: &Dataset) -> Vec<YearSummary> {
    let mut groups: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for s in &dataset.samples {
        groups.entry(s.year).or_default().push(s.passengers as f64);
    }
    groups
        .into_iter()
        .map(|(year, values)| YearSummary {
            year,
            avg: mean(&values),
            median: median(&values),
            std_dev: std_dev(&values),
            count: values.len(),
        })
        .collect()
}
