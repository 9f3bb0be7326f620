use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, RawColumn, RawTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a table of time series from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with series names, one time step per row
/// * `.json`    – `[{ "a": 1.0, "b": 2.0 }, ...]` (records orientation)
/// * `.parquet` – one numeric column per series
///
/// The result is unvalidated; pass it through
/// [`validate`](super::validator::validate) before analysis.
pub fn load_file(path: &Path) -> Result<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }?;

    log::info!(
        "Loaded {} columns ({} rows) from {}",
        table.columns.len(),
        table.num_rows(),
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one row per time step.
/// Short rows are allowed; the absent trailing fields count as missing.
fn load_csv(path: &Path) -> Result<RawTable> {
    let file = File::open(path).context("opening CSV")?;
    read_csv(file)
}

/// Parse CSV text from any reader. Split out of [`load_csv`] so in-memory
/// buffers (uploads, tests) go through the same code.
pub fn read_csv<R: std::io::Read>(input: R) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);

    // Header text is kept verbatim, surrounding whitespace included.
    let headers = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(str::to_string)
        .collect();
    let mut columns = empty_columns(mangle_duplicate_names(headers));

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if record.len() > columns.len() {
            bail!(
                "CSV row {row_no}: {} fields but only {} columns in the header",
                record.len(),
                columns.len()
            );
        }
        for (idx, col) in columns.iter_mut().enumerate() {
            let cell = record.get(idx).map_or(CellValue::Missing, CellValue::parse);
            col.cells.push(cell);
        }
    }

    Ok(RawTable::new(columns))
}

fn empty_columns(names: Vec<String>) -> Vec<RawColumn> {
    names
        .into_iter()
        .map(|name| RawColumn {
            name,
            cells: Vec::new(),
        })
        .collect()
}

/// Rename repeated column names the way pandas does: `a, a, a` becomes
/// `a, a.1, a.2`, skipping any suffix that is already taken.
pub fn mangle_duplicate_names(names: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::with_capacity(names.len());
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        let mut name = name;
        let mut count = counts.get(&name).copied().unwrap_or(0);
        while count > 0 {
            counts.insert(name.clone(), count + 1);
            name = format!("{name}.{count}");
            count = counts.get(&name).copied().unwrap_or(0);
        }
        counts.insert(name.clone(), count + 1);
        out.push(name);
    }
    out
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "logistic": 0.5, "ramp": 0.0 },
///   { "logistic": 0.975, "ramp": 0.01 },
///   ...
/// ]
/// ```
///
/// Column order follows the first appearance of each key. A key absent from
/// a record, or `null`, is a missing cell.
fn load_json(path: &Path) -> Result<RawTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

pub fn parse_json(text: &str) -> Result<RawTable> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut columns: Vec<RawColumn> = Vec::new();

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        for key in obj.keys() {
            if !columns.iter().any(|c| &c.name == key) {
                // Earlier rows did not have this key.
                columns.push(RawColumn {
                    name: key.clone(),
                    cells: vec![CellValue::Missing; i],
                });
            }
        }

        for col in &mut columns {
            col.cells
                .push(obj.get(&col.name).map_or(CellValue::Missing, json_to_cell));
        }
    }

    Ok(RawTable::new(columns))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::Number(n) => n
            .as_f64()
            .map_or_else(|| CellValue::Text(n.to_string()), CellValue::from_f64),
        JsonValue::Null => CellValue::Missing,
        JsonValue::String(s) => CellValue::parse(s),
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file where every column is one time series.
///
/// Float64/Float32/Int64/Int32 columns become numbers, nulls become missing
/// cells. Any other column type is kept as text so validation can reject it
/// with the column name attached.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<RawTable> {
    let file = File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;

    let names = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let mut columns = empty_columns(mangle_duplicate_names(names));

    let reader = builder.build().context("building parquet reader")?;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        for (col_idx, col) in columns.iter_mut().enumerate() {
            let array = batch.column(col_idx);
            col.cells.extend((0..batch.num_rows()).map(|row| extract_cell(array, row)));
        }
    }

    Ok(RawTable::new(columns))
}

// -- Parquet / Arrow helpers --

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &Arc<dyn Array>, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Missing;
    }
    match col.data_type() {
        DataType::Float64 => match col.as_any().downcast_ref::<Float64Array>() {
            Some(arr) => CellValue::from_f64(arr.value(row)),
            None => unexpected_type(col),
        },
        DataType::Float32 => match col.as_any().downcast_ref::<Float32Array>() {
            Some(arr) => CellValue::from_f64(arr.value(row) as f64),
            None => unexpected_type(col),
        },
        DataType::Int64 => match col.as_any().downcast_ref::<Int64Array>() {
            Some(arr) => CellValue::Number(arr.value(row) as f64),
            None => unexpected_type(col),
        },
        DataType::Int32 => match col.as_any().downcast_ref::<Int32Array>() {
            Some(arr) => CellValue::Number(arr.value(row) as f64),
            None => unexpected_type(col),
        },
        DataType::Utf8 => match col.as_any().downcast_ref::<StringArray>() {
            Some(arr) => CellValue::Text(arr.value(row).to_string()),
            None => unexpected_type(col),
        },
        DataType::LargeUtf8 => CellValue::Text(col.as_string::<i64>().value(row).to_string()),
        DataType::Boolean => match col.as_any().downcast_ref::<BooleanArray>() {
            Some(arr) => CellValue::Text(arr.value(row).to_string()),
            None => unexpected_type(col),
        },
        _ => unexpected_type(col),
    }
}

fn unexpected_type(col: &Arc<dyn Array>) -> CellValue {
    CellValue::Text(format!("{:?}", col.data_type()))
}
