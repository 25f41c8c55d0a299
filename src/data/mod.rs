/// Data layer: core types, loading, extraction, and categorisation.
///
/// Architecture:
/// ```text
///  earthquakes-YYYY.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<Record>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ extract   │  one field → typed Series
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ category  │  magnitudes → CategoryCounts (+ report)
///   └──────────┘
/// ```

pub mod category;
pub mod error;
pub mod extract;
pub mod loader;
pub mod model;
