use anyhow::{Context, Result};

use crate::config::PipelineConfig;
use crate::data::clean::{drop_incomplete, missing_counts};
use crate::data::generator::ensure_store;
use crate::data::loader::load_store;
use crate::data::model::SCHEMA;
use crate::report::{ColumnInfo, Report};
use crate::stats::{describe, summarize_by_year};

// ---------------------------------------------------------------------------
// generate → load → clean → summarise
// ---------------------------------------------------------------------------

/// Run every stage up to (not including) display and collect the results.
/// Calendar dates are derived later, by [`Report::charts`], so the textual
/// summary can be printed even when a month name turns out to be invalid.
pub fn run_pipeline(config: &PipelineConfig) -> Result<Report> {
    let generated = ensure_store(config).context("generating synthetic store")?;

    let table = load_store(&config.store_path)?;
    let loaded_shape = table.shape();
    let head = table.rows.iter().take(config.head_rows).cloned().collect();

    let missing = missing_counts(&table);
    let column_info = SCHEMA
        .iter()
        .zip(&missing)
        .map(|((name, kind), (_, n))| ColumnInfo {
            name: name.to_string(),
            non_null: loaded_shape.0 - n,
            dtype: kind.to_string(),
        })
        .collect();

    let dataset = drop_incomplete(table);
    let cleaned_shape = dataset.shape();
    if dataset.is_empty() {
        log::warn!("No complete rows left after cleaning");
    }
    log::info!(
        "After cleaning: {} rows, {} columns",
        cleaned_shape.0,
        cleaned_shape.1
    );

    let describe = describe(&dataset.passengers());
    let yearly = summarize_by_year(&dataset);
    log::debug!("Summarised {} years", yearly.len());

    Ok(Report {
        store_path: config.store_path.clone(),
        generated,
        loaded_shape,
        head,
        column_info,
        missing,
        cleaned_shape,
        describe,
        yearly,
        dataset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;
    use crate::config::GeneratorConfig;
    use crate::data::generator::GenerateOutcome;
    use crate::data::loader::LoadError;
    use tempfile::TempDir;

    fn config_for(path: std::path::PathBuf) -> PipelineConfig {
        PipelineConfig {
            store_path: path,
            generator: GeneratorConfig {
                seed: Some(11),
                ..GeneratorConfig::default()
            },
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn fresh_run_generates_and_summarises() {
        let dir = TempDir::new().unwrap();
        let cfg = config_for(dir.path().join("data/flights.csv"));

        let report = run_pipeline(&cfg).unwrap();
        assert!(matches!(report.generated, GenerateOutcome::Generated { rows: 312, .. }));
        assert_eq!(report.loaded_shape, (312, 3));
        // Cleaning is a no-op on freshly generated data.
        assert_eq!(report.cleaned_shape, (312, 3));
        assert!(report.missing.iter().all(|(_, n)| *n == 0));
        assert_eq!(report.head.len(), 5);
        assert_eq!(report.describe.count, 312);
        assert_eq!(report.yearly.len(), 26);
        assert!(report.yearly.iter().all(|y| y.count == 12));
        assert_eq!(report.charts(cfg.histogram_bins).unwrap().len(), 4);

        // Second run reads the same store back.
        let again = run_pipeline(&cfg).unwrap();
        assert_eq!(again.generated, GenerateOutcome::AlreadyPresent);
        assert_eq!(again.yearly, report.yearly);
    }

    #[test]
    fn three_row_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flights.csv");
        std::fs::write(
            &path,
            "year,month,passengers\n2000,January,210\n2000,February,205\n2001,January,260\n",
        )
        .unwrap();

        let report = run_pipeline(&config_for(path)).unwrap();
        assert_eq!(report.generated, GenerateOutcome::AlreadyPresent);
        assert_eq!(report.yearly.len(), 2);
        assert_eq!(report.yearly[0].year, 2000);
        assert_eq!(report.yearly[0].avg, 207.5);
        assert_eq!(report.yearly[0].count, 2);
        assert_eq!(report.yearly[1].year, 2001);
        assert_eq!(report.yearly[1].avg, 260.0);
        assert!(report.yearly[1].std_dev.is_nan());

        let charts = report.charts(20).unwrap();
        match &charts[1].kind {
            ChartKind::Bar { labels, .. } => assert_eq!(labels, &["2000", "2001"]),
            other => panic!("expected bar chart, got {other:?}"),
        }
    }

    #[test]
    fn incomplete_rows_are_reported_then_dropped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flights.csv");
        std::fs::write(
            &path,
            "year,month,passengers\n2000,January,210\n2000,,205\n2000,March,\n",
        )
        .unwrap();

        let report = run_pipeline(&config_for(path)).unwrap();
        assert_eq!(report.loaded_shape, (3, 3));
        assert_eq!(report.cleaned_shape, (1, 3));
        assert_eq!(report.column_info[1].non_null, 2);
        assert_eq!(report.column_info[2].dtype, "int64");
    }

    #[test]
    fn empty_store_aborts_with_empty_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flights.csv");
        std::fs::write(&path, "").unwrap();

        let err = run_pipeline(&config_for(path)).unwrap_err();
        assert!(matches!(err.downcast_ref::<LoadError>(), Some(LoadError::EmptyData(_))));
    }

    #[test]
    fn unknown_month_fails_only_after_summary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flights.csv");
        std::fs::write(&path, "year,month,passengers\n2000,Janvier,210\n").unwrap();

        let report = run_pipeline(&config_for(path)).unwrap();
        let summary = report.summary_text().unwrap();
        assert!(summary.contains("After cleaning: 1 rows, 3 columns"));
        assert!(summary.contains(">>> Yearly summary:"));

        let err = report.charts(20).unwrap_err();
        assert!(format!("{err:#}").contains("Janvier"));
    }

    #[test]
    fn store_with_extra_column_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flights.csv");
        std::fs::write(
            &path,
            "year,month,passengers,note\n2000,January,210,x\n2000,February,205,\n",
        )
        .unwrap();

        let err = run_pipeline(&config_for(path)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::ParseError { .. })
        ));
    }
}
