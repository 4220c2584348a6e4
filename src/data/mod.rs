/// Data layer: core types, loading, filtering and export.
///
/// Architecture:
/// ```text
///   linoleic_acid_data_combined.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset (+ range defaults, load report)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │    Dataset    │  Vec<FoodRecord>, shared read-only via DatasetHandle
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  category / ranges / text → FilteredView
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  FilteredView → CSV text / file
///   └──────────┘
/// ```

pub mod error;
pub mod export;
pub mod filter;
pub mod handle;
pub mod loader;
pub mod model;
