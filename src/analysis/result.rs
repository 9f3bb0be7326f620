use serde::Serialize;

use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// AnalysisResult – one per series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub name: String,
    pub mean_divergence: f64,
    /// `mean_divergence > 0`.
    pub chaotic: bool,
    /// Per-sample divergence, index-aligned with the series.
    pub points: Vec<f64>,
}

impl AnalysisResult {
    /// Human label used by the table and the report.
    pub fn label(&self) -> &'static str {
        if self.chaotic {
            "Yes"
        } else {
            "No"
        }
    }
}

// ---------------------------------------------------------------------------
// Views handed to renderers
// ---------------------------------------------------------------------------

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub series: String,
    pub mean_divergence: f64,
    pub chaotic: bool,
}

/// What a chart renderer needs: the raw signal and its divergence points.
#[derive(Debug, Clone, Copy)]
pub struct ChartSeries<'a> {
    pub name: &'a str,
    pub values: &'a [f64],
    pub points: &'a [f64],
}

/// What a report renderer needs for one paragraph.
#[derive(Debug, Clone, Copy)]
pub struct ReportEntry<'a> {
    pub name: &'a str,
    pub mean_divergence: f64,
    pub label: &'static str,
}

// ---------------------------------------------------------------------------
// ResultSet – ordered like the dataset's columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    results: Vec<AnalysisResult>,
}

impl ResultSet {
    pub(crate) fn new(results: Vec<AnalysisResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[AnalysisResult] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnalysisResult> {
        self.results.iter()
    }

    pub fn get(&self, name: &str) -> Option<&AnalysisResult> {
        self.results.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn chaotic_count(&self) -> usize {
        self.results.iter().filter(|r| r.chaotic).count()
    }

    pub fn names(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        self.results
            .iter()
            .map(|r| SummaryRow {
                series: r.name.clone(),
                mean_divergence: r.mean_divergence,
                chaotic: r.chaotic,
            })
            .collect()
    }

    /// Pair every result with its source series. Results whose series is not
    /// in `dataset` are skipped, so pass the dataset the set was built from.
    pub fn chart_series<'a>(&'a self, dataset: &'a Dataset) -> Vec<ChartSeries<'a>> {
        self.results
            .iter()
            .filter_map(|r| {
                let series = dataset.get(&r.name)?;
                Some(ChartSeries {
                    name: &r.name,
                    values: &series.values,
                    points: &r.points,
                })
            })
            .collect()
    }

    pub fn report_entries(&self) -> Vec<ReportEntry<'_>> {
        self.results
            .iter()
            .map(|r| ReportEntry {
                name: &r.name,
                mean_divergence: r.mean_divergence,
                label: r.label(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a AnalysisResult;
    type IntoIter = std::slice::Iter<'a, AnalysisResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
