use anyhow::{Result, anyhow};
use eframe::egui::{self, Color32};

use crate::chart::ChartSpec;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation – one window per chart
// ---------------------------------------------------------------------------

pub struct ChartApp {
    chart: ChartSpec,
    color: Color32,
}

impl ChartApp {
    pub fn new(chart: ChartSpec, color: Color32) -> Self {
        Self { chart, color }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_view(ui, &self.chart, self.color);
        });
    }
}

/// Open `chart` in its own native window and block until it is closed.
pub fn show_chart(chart: ChartSpec, color: Color32) -> Result<()> {
    let title = chart.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    log::debug!("Showing chart '{title}'");
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartApp::new(chart, color)))),
    )
    .map_err(|e| anyhow!("chart window '{title}' failed: {e}"))
}
