//! Analysis layer: divergence estimate, per-series driver, result set.
//!
//! ```text
//!   Dataset ──► analyzer ──► divergence::estimate (per series)
//!                   │
//!                   ▼
//!               ResultSet ──► summary rows / chart series / report entries
//! ```

pub mod analyzer;
pub mod divergence;
pub mod result;

pub use analyzer::{analyze, analyze_with};
pub use divergence::{estimate, Divergence, DEFAULT_DELTA};
pub use result::{AnalysisResult, ChartSeries, ReportEntry, ResultSet, SummaryRow};
