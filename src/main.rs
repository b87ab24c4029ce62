mod app;
mod chart;
mod color;
mod config;
mod data;
mod pipeline;
mod report;
mod stats;
mod ui;

use anyhow::Result;

use config::PipelineConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = PipelineConfig::default();
    let report = pipeline::run_pipeline(&config).inspect_err(|e| log::error!("{e:#}"))?;
    report.print_summary()?;

    let charts = report
        .charts(config.histogram_bins)
        .inspect_err(|e| log::error!("{e:#}"))?;
    let total = charts.len();
    for (i, chart) in charts.into_iter().enumerate() {
        app::show_chart(chart, color::chart_color(i, total))?;
    }

    report.print_findings();
    Ok(())
}
