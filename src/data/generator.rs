use std::f64::consts::PI;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tempfile::NamedTempFile;

use super::calendar::{month_name, month_starts};
use super::model::{Sample, column_names};
use crate::config::{GeneratorConfig, PipelineConfig};

// ---------------------------------------------------------------------------
// Synthetic series
// ---------------------------------------------------------------------------

/// Seasonal term: sine over the calendar month, zero in January and
/// peaking in April, with a period of twelve months.
fn seasonal(amplitude: f64, date: NaiveDate) -> f64 {
    amplitude * (2.0 * PI * date.month0() as f64 / 12.0).sin()
}

/// Build one sample per month of the configured range.
///
/// `passengers = base + trend * index + seasonal(month) + noise`, rounded to
/// the nearest integer with ties to even. Negative values are kept as-is.
pub fn generate_samples<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Vec<Sample> {
    // Negative or non-finite std: noiseless series.
    let noise = Normal::new(0.0, config.noise_std).ok();

    month_starts(config.start, config.end)
        .into_iter()
        .enumerate()
        .map(|(idx, date)| {
            let trend = config.base + config.trend_per_month * idx as f64;
            let eps = noise.as_ref().map_or(0.0, |n| n.sample(rng));
            let value = trend + seasonal(config.seasonal_amplitude, date) + eps;
            Sample {
                year: date.year(),
                month: month_name(date).to_string(),
                passengers: value.round_ties_even() as i64,
            }
        })
        .collect()
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

// ---------------------------------------------------------------------------
// Store creation
// ---------------------------------------------------------------------------

/// What [`ensure_store`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The store already existed and was left untouched.
    AlreadyPresent,
    /// A fresh series was written.
    Generated {
        rows: usize,
        first: NaiveDate,
        last: NaiveDate,
    },
}

/// Write samples to `path` as CSV, header first, in schema column order.
///
/// Rows go to a temporary file in the same directory, which is renamed onto
/// `path` only once fully flushed; a failed write never leaves a partial
/// store behind.
pub fn write_store(path: &Path, samples: &[Sample]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in {}", dir.display()))?;

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(tmp.as_file());
        writer
            .write_record(column_names())
            .context("writing CSV header")?;
        for sample in samples {
            writer
                .serialize(sample)
                .with_context(|| format!("writing row {sample:?}"))?;
        }
        writer.flush().context("flushing CSV writer")?;
    }

    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("moving store into place at {}", path.display()))?;
    Ok(())
}

/// Generate the store unless it already exists.
pub fn ensure_store(config: &PipelineConfig) -> Result<GenerateOutcome> {
    let path = config.store_path.as_path();
    if path.exists() {
        log::debug!("Store {} already present, skipping generation", path.display());
        return Ok(GenerateOutcome::AlreadyPresent);
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display()))?;
    }

    let params = &config.generator;
    log::info!(
        "Generating synthetic data {}..{} -> {}",
        params.start,
        params.end,
        path.display()
    );
    let mut rng = make_rng(params.seed);
    let samples = generate_samples(params, &mut rng);
    write_store(path, &samples)?;

    let dates = month_starts(params.start, params.end);
    Ok(GenerateOutcome::Generated {
        rows: samples.len(),
        first: dates.first().copied().unwrap_or(params.start),
        last: dates.last().copied().unwrap_or(params.end),
    })
}
