/// Data layer: loading, thresholds, classification and plot selection.
///
/// Architecture:
/// ```text
///   food.csv
///      │
///      ▼
///   ┌──────────┐
///   │  loader  │  parse CSV → FoodTable (cached once per path)
///   └──────────┘
///      │
///      ▼
///   ┌────────────┐
///   │ thresholds │  33% / 67% quantiles → Thresholds
///   └────────────┘
///      │
///      ▼
///   ┌──────────┐
///   │ classify │  per-row rules → LabeledTable
///   └──────────┘
///      │
///      ▼
///   ┌──────────┐
///   │  filter  │  complete rows → one point series per HealthGoal
///   └──────────┘
/// ```

pub mod classify;
pub mod filter;
pub mod loader;
pub mod model;
pub mod thresholds;
