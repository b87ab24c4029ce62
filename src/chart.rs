use chrono::NaiveDate;

use crate::data::model::DatedSample;
use crate::stats::YearSummary;

// ---------------------------------------------------------------------------
// Chart descriptions (toolkit independent)
// ---------------------------------------------------------------------------

/// One histogram bin, `[lo, hi)` except for the last bin which is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

impl HistBin {
    pub fn center(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

/// What a chart draws.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartKind {
    /// Chronological series, connected, with markers.
    Line { points: Vec<(NaiveDate, f64)> },
    /// One bar per category, in the given order.
    Bar { labels: Vec<String>, values: Vec<f64> },
    Histogram { bins: Vec<HistBin> },
    /// Unconnected markers drawn with opacity `alpha`.
    Scatter { points: Vec<[f64; 2]>, alpha: f32 },
}

/// A titled chart with axis labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub kind: ChartKind,
}

// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

/// Split `values` into `n` equal-width bins spanning the observed min/max.
/// A zero-width range is widened by 0.5 on each side; an empty input uses
/// `[0, 1]`.
pub fn histogram(values: &[f64], n: usize) -> Vec<HistBin> {
    let n = n.max(1);
    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if values.is_empty() {
        (lo, hi) = (0.0, 1.0);
    } else if lo == hi {
        (lo, hi) = (lo - 0.5, hi + 0.5);
    }

    let width = (hi - lo) / n as f64;
    let mut counts = vec![0usize; n];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(n - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistBin {
            lo: lo + width * i as f64,
            hi: if i + 1 == n { hi } else { lo + width * (i + 1) as f64 },
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// The four charts
// ---------------------------------------------------------------------------

fn year_span(samples: &[DatedSample]) -> String {
    match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => format!("{}–{}", first.sample.year, last.sample.year),
        _ => "no data".to_string(),
    }
}

/// Line chart of passengers over time.
pub fn line_chart(samples: &[DatedSample]) -> ChartSpec {
    ChartSpec {
        title: format!("Synthetic Monthly Passengers ({})", year_span(samples)),
        x_label: "Date".into(),
        y_label: "Passengers".into(),
        kind: ChartKind::Line {
            points: samples
                .iter()
                .map(|d| (d.date, d.sample.passengers as f64))
                .collect(),
        },
    }
}

/// Bar chart of the yearly average.
pub fn bar_chart(summary: &[YearSummary], span: &str) -> ChartSpec {
    ChartSpec {
        title: format!("Average Monthly Passengers by Year ({span})"),
        x_label: "Year".into(),
        y_label: "Average Passengers".into(),
        kind: ChartKind::Bar {
            labels: summary.iter().map(|s| s.year.to_string()).collect(),
            values: summary.iter().map(|s| s.avg).collect(),
        },
    }
}

/// Histogram of monthly passenger counts.
pub fn histogram_chart(samples: &[DatedSample], bins: usize) -> ChartSpec {
    let values: Vec<f64> = samples.iter().map(|d| d.sample.passengers as f64).collect();
    ChartSpec {
        title: "Histogram of Monthly Passenger Counts".into(),
        x_label: "Passengers".into(),
        y_label: "Frequency".into(),
        kind: ChartKind::Histogram {
            bins: histogram(&values, bins),
        },
    }
}

/// Year against passengers, one marker per month.
pub fn scatter_chart(samples: &[DatedSample]) -> ChartSpec {
    ChartSpec {
        title: "Scatter Plot: Year vs. Monthly Passengers".into(),
        x_label: "Year".into(),
        y_label: "Passengers".into(),
        kind: ChartKind::Scatter {
            points: samples
                .iter()
                .map(|d| [d.sample.year as f64, d.sample.passengers as f64])
                .collect(),
            alpha: 0.6,
        },
    }
}

/// Line, bar, histogram and scatter charts, in that order.
pub fn build_charts(
    samples: &[DatedSample],
    summary: &[YearSummary],
    bins: usize,
) -> Vec<ChartSpec> {
    vec![
        line_chart(samples),
        bar_chart(summary, &year_span(samples)),
        histogram_chart(samples, bins),
        scatter_chart(samples),
    ]
}
