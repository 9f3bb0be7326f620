use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use rusty_chaos::data::model::RawTable;
use rusty_chaos::report::{export_summary, save_report, DEFAULT_REPORT_FILE};

use crate::color::label_color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – summary table
// ---------------------------------------------------------------------------

/// Render the left panel: one row per series with its mean and label.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Lyapunov Exponent Results");
    ui.separator();

    let Some(results) = &state.results else {
        ui.label("No dataset loaded.");
        return;
    };

    ui.label(format!(
        "{} of {} series chaotic",
        results.chaotic_count(),
        results.len()
    ));
    ui.checkbox(&mut state.show_all, "Show all series");
    ui.separator();

    let mut clicked: Option<String> = None;
    let selected = state.selected.as_deref();
    let show_all = state.show_all;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(80.0))
        .column(Column::auto())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Series");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Lyapunov exponent");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Chaotic?");
            });
        })
        .body(|mut body| {
            for result in results {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        let is_selected = !show_all && selected == Some(result.name.as_str());
                        if ui.selectable_label(is_selected, &result.name).clicked() {
                            clicked = Some(result.name.clone());
                        }
                    });
                    row.col(|ui: &mut Ui| {
                        ui.monospace(format!("{:.4}", result.mean_divergence));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(
                            RichText::new(result.label()).color(label_color(result.chaotic)),
                        );
                    });
                });
            }
        });

    if let Some(name) = clicked {
        state.select(name);
    }
}

// ---------------------------------------------------------------------------
// Uploaded data – the table as loaded, before validation
// ---------------------------------------------------------------------------

/// Render every cell of `table`. Missing cells show as `NaN`; a column
/// shorter than the table leaves its trailing cells blank.
pub fn data_table(ui: &mut Ui, table: &RawTable) {
    ui.label(format!(
        "{} columns × {} rows",
        table.columns.len(),
        table.num_rows()
    ));
    ui.separator();

    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(40.0))
            .columns(Column::auto().at_least(60.0), table.columns.len())
            .header(20.0, |mut header| {
                header.col(|ui: &mut Ui| {
                    ui.strong("#");
                });
                for col in &table.columns {
                    header.col(|ui: &mut Ui| {
                        ui.strong(&col.name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, table.num_rows(), |mut row| {
                    let i = row.index();
                    row.col(|ui: &mut Ui| {
                        ui.weak(i.to_string());
                    });
                    for col in &table.columns {
                        row.col(|ui: &mut Ui| {
                            if let Some(cell) = col.cells.get(i) {
                                ui.monospace(cell.to_string());
                            }
                        });
                    }
                });
            });
    });
}

// ---------------------------------------------------------------------------
// Formula reference
// ---------------------------------------------------------------------------

/// The estimator and its symbols, as used by the analysis.
pub fn formula_panel(ui: &mut Ui, delta: f64) {
    ui.heading("Lyapunov exponent estimate");
    ui.separator();

    ui.label("Per time step (λ₀ = 0):");
    ui.monospace("λᵢ = ln( |xᵢ₋₁ + δ − xᵢ| / δ )");
    ui.label("A zero distance contributes 0 instead of ln(0).");
    ui.add_space(6.0);

    ui.label("Series mean:");
    ui.monospace("λ = (1/N) Σ λᵢ");
    ui.label("A series is labelled chaotic when λ > 0.");
    ui.add_space(6.0);

    egui::Grid::new("formula_legend")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            let legend = [
                ("λᵢ", "divergence at step i"),
                ("λ", "mean divergence of the series"),
                ("xᵢ", "value at step i"),
                ("xᵢ₋₁", "value at the previous step"),
                ("δ", "perturbation added to xᵢ₋₁"),
                ("N", "number of steps in the series"),
            ];
            for (symbol, meaning) in legend {
                ui.monospace(symbol);
                ui.label(meaning);
                ui.end_row();
            }
        });

    ui.separator();
    ui.label(format!("δ for this session: {delta:e}"));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let has_results = state.results.is_some();
            if ui
                .add_enabled(has_results, egui::Button::new("Save report…"))
                .clicked()
            {
                save_report_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(has_results, egui::Button::new("Export summary…"))
                .clicked()
            {
                export_summary_dialog(state);
                ui.close_menu();
            }
        });

        ui.menu_button("View", |ui: &mut Ui| {
            ui.add_enabled_ui(state.raw.is_some(), |ui: &mut Ui| {
                ui.checkbox(&mut state.show_data, "Uploaded data");
            });
            ui.checkbox(&mut state.show_all, "All series");
        });

        ui.menu_button("Help", |ui: &mut Ui| {
            ui.checkbox(&mut state.show_formulas, "Formulas");
        });

        ui.separator();

        if let (Some(ds), Some(source)) = (&state.dataset, &state.source) {
            let name = source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(format!("{name}: {} series", ds.len()));
            ui.separator();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open time series")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}

fn save_report_dialog(state: &mut AppState) {
    let Some(results) = &state.results else {
        return;
    };
    let file = rfd::FileDialog::new()
        .set_title("Save report")
        .set_file_name(DEFAULT_REPORT_FILE)
        .add_filter("Text", &["txt"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = save_report(results, &path) {
            log::error!("Failed to save report: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

fn export_summary_dialog(state: &mut AppState) {
    let Some(results) = &state.results else {
        return;
    };
    let file = rfd::FileDialog::new()
        .set_title("Export summary table")
        .set_file_name("lyapunov_summary.csv")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = export_summary(results, &path) {
            log::error!("Failed to export summary: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
