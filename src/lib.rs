//! Lyapunov-type divergence analysis for numeric time series.
//!
//! ```text
//!  .csv / .json / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → RawTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ validator  │  reject missing / non-numeric cells → Dataset
//!   └───────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ analyzer  │  estimate divergence per series → ResultSet
//!   └──────────┘
//!        │
//!        ▼
//!   summary table, charts, report
//! ```

pub mod analysis;
pub mod config;
pub mod data;
pub mod report;

pub use analysis::{analyze, analyze_with, estimate, AnalysisResult, ResultSet, DEFAULT_DELTA};
pub use config::AnalysisConfig;
pub use data::model::{Dataset, Series};
pub use data::validator::{validate, ValidationError};
