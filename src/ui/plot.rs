use std::f32::consts::FRAC_PI_4;

use chrono::{Datelike, NaiveDate};
use eframe::egui::epaint::TextShape;
use eframe::egui::{Color32, FontId, Pos2, Stroke, Ui};
use egui_plot::{Bar, BarChart, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points};

use crate::chart::{ChartKind, ChartSpec, HistBin};
use crate::color::with_alpha;

/// Vertical space reserved under the bar chart for rotated year labels.
const ROTATED_LABEL_BAND: f32 = 48.0;

// ---------------------------------------------------------------------------
// Chart view (central panel)
// ---------------------------------------------------------------------------

/// Render one chart, title on top, filling the available space.
pub fn chart_view(ui: &mut Ui, chart: &ChartSpec, color: Color32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.title);
    });
    ui.add_space(4.0);

    match &chart.kind {
        ChartKind::Line { points } => line_plot(ui, chart, points, color),
        ChartKind::Bar { labels, values } => bar_plot(ui, chart, labels, values, color),
        ChartKind::Histogram { bins } => histogram_plot(ui, chart, bins, color),
        ChartKind::Scatter { points, alpha } => scatter_plot(ui, chart, points, *alpha, color),
    }
}

// -- Dates on the x axis are days since 0001-01-01 --

fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn x_to_date(x: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

fn line_plot(ui: &mut Ui, chart: &ChartSpec, points: &[(NaiveDate, f64)], color: Color32) {
    let xy: Vec<[f64; 2]> = points.iter().map(|&(d, y)| [date_to_x(d), y]).collect();

    Plot::new("line_chart")
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .allow_boxed_zoom(true)
        .x_axis_formatter(|mark, _range| {
            x_to_date(mark.value)
                .map(|d| d.format("%Y-%m").to_string())
                .unwrap_or_default()
        })
        .label_formatter(|_name, value: &PlotPoint| match x_to_date(value.x) {
            Some(d) => format!("{}\n{:.0}", d.format("%B %Y"), value.y),
            None => String::new(),
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(xy.clone()))
                    .color(color)
                    .width(1.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(xy))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(2.5)
                    .color(color),
            );
        });
}

fn bar_plot(ui: &mut Ui, chart: &ChartSpec, labels: &[String], values: &[f64], color: Color32) {
    let bars: Vec<Bar> = values
        .iter()
        .zip(labels)
        .enumerate()
        .map(|(i, (&v, label))| Bar::new(i as f64, v).width(0.8).name(label))
        .collect();

    let height = (ui.available_height() - ROTATED_LABEL_BAND - 20.0).max(100.0);
    let response = Plot::new("bar_chart")
        .y_axis_label(chart.y_label.clone())
        .allow_boxed_zoom(true)
        .height(height)
        .show_axes([false, true])
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(color));
        });

    // Category labels, rotated 45° and right-aligned on their tick.
    let painter = ui.painter();
    let top = response.response.rect.bottom() + 4.0;
    let text_color = ui.visuals().text_color();
    for (i, label) in labels.iter().enumerate() {
        let tick = response
            .transform
            .position_from_point(&PlotPoint::new(i as f64, 0.0));
        if !response.response.rect.x_range().contains(tick.x) {
            continue;
        }
        let galley = painter.layout_no_wrap(label.clone(), FontId::proportional(12.0), text_color);
        let w = galley.size().x * FRAC_PI_4.cos();
        let pos = Pos2::new(tick.x - w, top + w);
        painter.add(TextShape::new(pos, galley, text_color).with_angle(-FRAC_PI_4));
    }

    ui.add_space(ROTATED_LABEL_BAND);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(&chart.x_label);
    });
}

fn histogram_plot(ui: &mut Ui, chart: &ChartSpec, bins: &[HistBin], color: Color32) {
    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            Bar::new(b.center(), b.count as f64)
                .width(b.width())
                .fill(color)
                .stroke(Stroke::new(1.0, Color32::BLACK))
                .name(format!("{:.0}–{:.0}", b.lo, b.hi))
        })
        .collect();

    Plot::new("histogram_chart")
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .allow_boxed_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

fn scatter_plot(ui: &mut Ui, chart: &ChartSpec, points: &[[f64; 2]], alpha: f32, color: Color32) {
    Plot::new("scatter_chart")
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .allow_boxed_zoom(true)
        .x_axis_formatter(|mark, _range| {
            if mark.value.fract() == 0.0 {
                format!("{:.0}", mark.value)
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(PlotPoints::from(points.to_vec()))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(3.5)
                    .color(with_alpha(color, alpha)),
            );
        });
}
