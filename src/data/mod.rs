/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   measures.csv   (';'-delimited, header row)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  header → column index, rows → (measure, value)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  MeasureRange: start <= measure < end
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  Series { xs, ys }, ordering, trimming
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
