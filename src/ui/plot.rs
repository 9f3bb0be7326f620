use eframe::egui::{Color32, ScrollArea, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};
use rusty_chaos::analysis::ChartSeries;

use crate::color::DIVERGENCE_COLOR;
use crate::state::AppState;

const PLOT_HEIGHT: f32 = 220.0;

// ---------------------------------------------------------------------------
// Series plots (central panel)
// ---------------------------------------------------------------------------

/// Render two stacked charts per visible series: the signal, then its
/// divergence points. Both share the time-step axis.
pub fn series_plots(ui: &mut Ui, state: &AppState) {
    let (Some(dataset), Some(results)) = (&state.dataset, &state.results) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a CSV file to analyze  (File → Open…)");
        });
        return;
    };

    let visible = state.visible_series();
    if visible.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Select a series in the table");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for chart in results.chart_series(dataset) {
                if !visible.iter().any(|name| name == chart.name) {
                    continue;
                }
                let color = state
                    .palette
                    .as_ref()
                    .map_or(Color32::LIGHT_BLUE, |p| p.color_for(chart.name));

                signal_plot(ui, &chart, color);
                divergence_plot(ui, &chart);
                ui.separator();
            }
        });
}

fn signal_plot(ui: &mut Ui, chart: &ChartSeries<'_>, color: Color32) {
    ui.strong(format!("Time Series: {}", chart.name));
    Plot::new(("signal", chart.name))
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Time Steps")
        .y_axis_label("Value")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(indexed_points(chart.values))
                .name("Time Series")
                .color(color)
                .width(1.5);
            plot_ui.line(line);
        });
}

fn divergence_plot(ui: &mut Ui, chart: &ChartSeries<'_>) {
    ui.strong(format!("Lyapunov Exponent Series: {}", chart.name));
    Plot::new(("divergence", chart.name))
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Time Steps")
        .y_axis_label("Lyapunov exponent")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(indexed_points(chart.points))
                .name("Lyapunov Exponent Series")
                .color(DIVERGENCE_COLOR)
                .width(1.5);
            plot_ui.line(line);
        });
}

/// `[step, value]` pairs with the step as x.
fn indexed_points(values: &[f64]) -> PlotPoints {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64, v])
        .collect()
}
