use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RustyChaosApp {
    pub state: AppState,
}

impl RustyChaosApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for RustyChaosApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: summary table ----
        egui::SidePanel::left("summary_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plots ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::series_plots(ui, &self.state);
        });

        // ---- Floating windows ----
        let state = &mut self.state;
        if let Some(raw) = &state.raw {
            egui::Window::new("Uploaded Data")
                .open(&mut state.show_data)
                .default_size([520.0, 360.0])
                .show(ctx, |ui| {
                    panels::data_table(ui, raw);
                });
        }

        let delta = state.config.delta;
        egui::Window::new("Formulas")
            .open(&mut state.show_formulas)
            .resizable(false)
            .show(ctx, |ui| {
                panels::formula_panel(ui, delta);
            });
    }
}
