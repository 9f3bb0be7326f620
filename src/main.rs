mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use app::RustyChaosApp;
use eframe::egui;
use rusty_chaos::AnalysisConfig;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let mut state = match AnalysisConfig::from_env() {
        Ok(config) => AppState::new(config),
        Err(e) => {
            log::error!("Invalid config, using defaults: {e:#}");
            let mut state = AppState::new(AnalysisConfig::default());
            state.status_message = Some(format!("Config error: {e:#}"));
            state
        }
    };

    // Optional file to open at start-up.
    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        state.open(&path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Chaos – Lyapunov Analysis",
        options,
        Box::new(move |_cc| Ok(Box::new(RustyChaosApp::new(state)))),
    )
}
