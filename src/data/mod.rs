//! Data layer: raw tables, validation and the typed dataset.
//!
//! Architecture:
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
//!   │ validator  │  structural checks → Dataset
//!   └───────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Dataset  │  Vec<Series>, column order preserved
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod validator;
