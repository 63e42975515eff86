/// Data layer: core types, loading, aggregation, and filtering.
///
/// Architecture:
/// ```text
///  grades.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Gradebook
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Gradebook │  roster + per-student grade rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐   ┌──────────┐
///   │  stats    │   │  filter   │  mean/min/max, grade-range bands
///   └──────────┘   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
