/// Data layer: schema, generation, loading, cleaning and calendar dates.
///
/// Architecture:
/// ```text
///   generator   synthesise series → data/flights.csv (only if absent)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → RawTable (cells may be missing)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  drop incomplete rows → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ calendar  │  (year, month name) → first-of-month date
///   └──────────┘
/// ```

pub mod calendar;
pub mod clean;
pub mod generator;
pub mod loader;
pub mod model;
