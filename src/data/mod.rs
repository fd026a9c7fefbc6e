/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  data/launches.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate rows → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, option lists, payload extent
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site + payload predicates → row indices
///   └──────────┘
/// ```
///
/// The dataset is built once at startup and never mutated; filtering hands
/// out index views, not copies.

pub mod filter;
pub mod loader;
pub mod model;
