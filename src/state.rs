use std::path::{Path, PathBuf};

use rusty_chaos::data::loader::load_file;
use rusty_chaos::data::model::{Dataset, RawTable};
use rusty_chaos::{analyze_with, validate, AnalysisConfig, ResultSet};

use crate::color::SeriesPalette;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Analysis parameters, fixed for the session.
    pub config: AnalysisConfig,

    /// File the current table came from.
    pub source: Option<PathBuf>,

    /// Table as loaded, before validation. Kept even when validation fails.
    pub raw: Option<RawTable>,

    /// Validated dataset (None until a file loads cleanly).
    pub dataset: Option<Dataset>,

    /// Results for `dataset`; always set together with it.
    pub results: Option<ResultSet>,

    /// Series shown in the central panel when `show_all` is off.
    pub selected: Option<String>,

    /// Plot every series instead of just the selected one.
    pub show_all: bool,

    /// Line colour per series.
    pub palette: Option<SeriesPalette>,

    /// "Uploaded Data" window.
    pub show_data: bool,

    /// Formula reference window.
    pub show_formulas: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            source: None,
            raw: None,
            dataset: None,
            results: None,
            selected: None,
            show_all: true,
            palette: None,
            show_data: false,
            show_formulas: false,
            status_message: None,
        }
    }

    /// Load, validate and analyze `path`. Any failure clears the previous
    /// results so no stale table or chart stays on screen.
    pub fn open(&mut self, path: &Path) {
        match load_file(path) {
            Ok(table) => self.ingest(table, path),
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.clear();
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Validate and analyze a loaded table. The table itself stays
    /// viewable when validation fails; results do not.
    pub fn ingest(&mut self, table: RawTable, path: &Path) {
        self.clear();
        self.source = Some(path.to_path_buf());
        let validated = validate(&table);
        self.raw = Some(table);
        self.show_data = true;

        match validated {
            Ok(dataset) => {
                let results = analyze_with(&dataset, &self.config);
                log::info!(
                    "{}: {} series, {} chaotic",
                    path.display(),
                    results.len(),
                    results.chaotic_count()
                );
                self.set_results(dataset, results);
            }
            Err(e) => {
                log::error!("Data validation error in {}: {e}", path.display());
                self.status_message = Some(format!("Data validation error: {e}"));
            }
        }
    }

    /// Ingest a freshly analyzed dataset and reset the view.
    pub fn set_results(&mut self, dataset: Dataset, results: ResultSet) {
        self.palette = Some(SeriesPalette::new(&dataset.column_names()));
        self.selected = results.names().first().map(|s| s.to_string());
        self.dataset = Some(dataset);
        self.results = Some(results);
        self.status_message = None;
    }

    pub fn clear(&mut self) {
        self.source = None;
        self.raw = None;
        self.dataset = None;
        self.results = None;
        self.selected = None;
        self.palette = None;
    }

    pub fn select(&mut self, name: String) {
        self.selected = Some(name);
        self.show_all = false;
    }

    /// Names of the series to plot, in column order.
    pub fn visible_series(&self) -> Vec<String> {
        let Some(results) = &self.results else {
            return Vec::new();
        };
        if self.show_all {
            return results.names().into_iter().map(String::from).collect();
        }
        self.selected
            .iter()
            .filter(|name| results.get(name).is_some())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusty_chaos::analyze;
    use rusty_chaos::data::model::{CellValue, RawColumn};

    fn loaded_state() -> AppState {
        let mut state = AppState::new(AnalysisConfig::default());
        let table = RawTable::from_numbers(vec![("a", vec![0.0, 1.0]), ("b", vec![1.0])]);
        let dataset = validate(&table).unwrap();
        let results = analyze(&dataset);
        state.set_results(dataset, results);
        state
    }

    #[test]
    fn first_series_is_selected_after_load() {
        let state = loaded_state();
        assert_eq!(state.selected.as_deref(), Some("a"));
        assert_eq!(state.visible_series(), vec!["a", "b"]);
    }

    #[test]
    fn selecting_narrows_the_plots() {
        let mut state = loaded_state();
        state.select("b".to_string());
        assert_eq!(state.visible_series(), vec!["b"]);
    }

    #[test]
    fn failed_open_clears_previous_results() {
        let mut state = loaded_state();
        state.open(Path::new("does-not-exist.csv"));
        assert!(state.results.is_none());
        assert!(state.dataset.is_none());
        assert!(state.status_message.is_some());
        assert!(state.visible_series().is_empty());
        assert!(state.raw.is_none());
    }

    #[test]
    fn invalid_table_stays_viewable_without_results() {
        let mut state = loaded_state();
        let table = RawTable::new(vec![RawColumn {
            name: "a".to_string(),
            cells: vec![CellValue::Number(1.0), CellValue::Missing],
        }]);
        state.ingest(table.clone(), Path::new("upload.csv"));

        assert_eq!(state.raw.as_ref(), Some(&table));
        assert!(state.show_data);
        assert!(state.dataset.is_none());
        assert!(state.results.is_none());
        let msg = state.status_message.as_deref().unwrap();
        assert!(msg.contains("missing values"));
    }

    #[test]
    fn valid_table_is_analyzed_and_kept() {
        let mut state = AppState::new(AnalysisConfig::default());
        let table = RawTable::from_numbers(vec![("x", vec![0.0, 1.0])]);
        state.ingest(table, Path::new("upload.csv"));

        assert!(state.raw.is_some());
        assert_eq!(state.results.as_ref().map(|r| r.len()), Some(1));
        assert!(state.status_message.is_none());
        assert_eq!(state.source.as_deref(), Some(Path::new("upload.csv")));
    }
}
