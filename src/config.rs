use std::path::PathBuf;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Fixed pipeline constants
// ---------------------------------------------------------------------------

/// Location of the backing store, relative to the working directory.
pub const STORE_PATH: &str = "data/flights.csv";

/// Number of histogram bins.
pub const HISTOGRAM_BINS: usize = 20;

/// Parameters of the synthetic passenger series.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// First month of the series (day is always 1).
    pub start: NaiveDate,
    /// Last month of the series, inclusive.
    pub end: NaiveDate,
    pub base: f64,
    pub trend_per_month: f64,
    pub seasonal_amplitude: f64,
    pub noise_std: f64,
    /// Fixed RNG seed. `None` draws from the OS, so every regeneration differs.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid start month"),
            end: NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid end month"),
            base: 200.0,
            trend_per_month: 2.5,
            seasonal_amplitude: 80.0,
            noise_std: 20.0,
            seed: None,
        }
    }
}

/// Everything a pipeline run needs. There is no runtime configuration
/// surface: the binary always uses [`PipelineConfig::default`].
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub store_path: PathBuf,
    pub generator: GeneratorConfig,
    pub histogram_bins: usize,
    /// Rows shown in the "first rows" preview.
    pub head_rows: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(STORE_PATH),
            generator: GeneratorConfig::default(),
            histogram_bins: HISTOGRAM_BINS,
            head_rows: 5,
        }
    }
}
