/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  breakdown.txt            .json / .csv benchmark reports
///        │                          │
///        ▼                          ▼
///   ┌──────────┐              ┌──────────┐
///   │  loader   │              │  loader   │  parse file(s)
///   └──────────┘              └──────────┘
///        │                          │
///        ▼                          ▼
///   ┌───────────┐             ┌─────────────┐
///   │ Breakdown  │             │ TimingTable  │  categories × series
///   └───────────┘             └─────────────┘
/// ```

pub mod loader;
pub mod model;
