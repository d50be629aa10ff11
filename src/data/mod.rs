/// Data layer: record model, bundled dataset, filtering, aggregation, export.
///
/// Architecture:
/// ```text
///   ┌──────────┐
///   │ dataset   │  bundled records → Registry
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  search + status + kind → visible indices
///   └──────────┘
///        │
///        ├──────────────────┐
///        ▼                  ▼
///   ┌──────────┐      ┌──────────┐
///   │  stats    │      │  export   │
///   │ summary,  │      │ CSV bytes │
///   │ shares    │      │ with BOM  │
///   └──────────┘      └──────────┘
/// ```
pub mod dataset;
pub mod export;
pub mod filter;
pub mod model;
pub mod stats;
