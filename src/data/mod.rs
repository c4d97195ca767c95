/// Data layer: core types, loading, filtering, and option derivation.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → IndicatorDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ IndicatorDataset│  Vec<DataPoint> + manifest metadata
///   └────────────────┘
///        │
///        ├──────────────────────────┐
///        ▼                          ▼
///   ┌──────────┐              ┌──────────┐
///   │  filter   │  FilterSpec │ options   │  distinct sorted
///   │           │  → indices  │           │  selector values
///   └──────────┘              └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod options;
