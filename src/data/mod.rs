/// Data layer: core types, loading, and rescaling.
///
/// Architecture:
/// ```text
///  seven whitespace tables (gr_*, Limit_*, exo*)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset, grouped by manifest
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ Collection  │  Category → Region → Dataset
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ transform   │  log10(ε²) → ε for the Dark SUSY category
///   └────────────┘
/// ```

pub mod loader;
pub mod model;
pub mod transform;

pub use loader::{load_collection, LoadError, MANIFEST};
pub use model::{Category, Collection, Dataset, Point, Region};
pub use transform::scale_collection;
