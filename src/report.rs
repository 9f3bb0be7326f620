//! Report and summary-table output.
//!
//! The report is one title block plus one paragraph per series. The summary
//! table can be written as CSV or JSON, or pretty-printed for a terminal.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::analysis::{ReportEntry, ResultSet};

pub const REPORT_TITLE: &str = "Lyapunov Exponent and Chaos Analysis Report";
pub const DEFAULT_REPORT_FILE: &str = "lyapunov_report.txt";

// ---------------------------------------------------------------------------
// Report rendering
// ---------------------------------------------------------------------------

/// Turns report entries into a document.
pub trait ReportRenderer {
    fn render(&self, entries: &[ReportEntry<'_>], out: &mut dyn Write) -> Result<()>;
}

/// Plain-text report, laid out like a printed page.
#[derive(Debug, Clone)]
pub struct TextReport {
    pub title: String,
    pub width: usize,
}

impl Default for TextReport {
    fn default() -> Self {
        Self {
            title: REPORT_TITLE.to_string(),
            width: 60,
        }
    }
}

impl ReportRenderer for TextReport {
    fn render(&self, entries: &[ReportEntry<'_>], out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{:^width$}", self.title, width = self.width)?;
        writeln!(out, "{}", "=".repeat(self.width))?;

        for entry in entries {
            writeln!(out)?;
            writeln!(out, "Series: {}", entry.name)?;
            writeln!(out, "Lyapunov exponent: {:.4}", entry.mean_divergence)?;
            writeln!(out, "Chaotic: {}", entry.label)?;
        }
        Ok(())
    }
}

/// Render `results` with `renderer` into a byte buffer.
pub fn render_report(results: &ResultSet, renderer: &dyn ReportRenderer) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    renderer.render(&results.report_entries(), &mut buf)?;
    Ok(buf)
}

/// Render the text report and write it to `path`.
pub fn save_report(results: &ResultSet, path: &Path) -> Result<()> {
    let bytes = render_report(results, &TextReport::default())?;
    std::fs::write(path, bytes)
        .with_context(|| format!("writing report to {}", path.display()))?;
    log::info!("Wrote report for {} series to {}", results.len(), path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Summary table
// ---------------------------------------------------------------------------

pub fn write_summary_csv<W: Write>(results: &ResultSet, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in results.summary_rows() {
        writer.serialize(row).context("writing summary row")?;
    }
    writer.flush().context("flushing summary CSV")?;
    Ok(())
}

pub fn write_summary_json<W: Write>(results: &ResultSet, out: W) -> Result<()> {
    serde_json::to_writer_pretty(out, &results.summary_rows()).context("writing summary JSON")?;
    Ok(())
}

/// Export the summary table, choosing CSV or JSON from the extension.
pub fn export_summary(results: &ResultSet, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        write_summary_json(results, file)?;
    } else {
        write_summary_csv(results, file)?;
    }
    log::info!("Exported summary table to {}", path.display());
    Ok(())
}

/// The summary table as an Arrow batch.
pub fn summary_batch(results: &ResultSet) -> Result<RecordBatch> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("series", DataType::Utf8, false),
        Field::new("mean_divergence", DataType::Float64, false),
        Field::new("chaotic", DataType::Utf8, false),
    ]));

    let names: ArrayRef = Arc::new(StringArray::from(results.names()));
    let means: ArrayRef = Arc::new(Float64Array::from(
        results.iter().map(|r| r.mean_divergence).collect::<Vec<_>>(),
    ));
    let labels: ArrayRef = Arc::new(StringArray::from(
        results.iter().map(|r| r.label()).collect::<Vec<_>>(),
    ));

    RecordBatch::try_new(schema, vec![names, means, labels]).context("building summary batch")
}

/// Box-drawn summary table for terminal output.
pub fn format_summary_table(results: &ResultSet) -> Result<String> {
    let batch = summary_batch(results)?;
    let table = pretty_format_batches(&[batch]).context("formatting summary table")?;
    Ok(table.to_string())
}
