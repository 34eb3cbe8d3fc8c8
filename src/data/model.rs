use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::thresholds::Thresholds;

// ---------------------------------------------------------------------------
// Source columns
// ---------------------------------------------------------------------------

pub const CALORIES_COLUMN: &str = "Data.Kilocalories";
pub const FAT_COLUMN: &str = "Data.Fat.Total Lipid";
pub const PROTEIN_COLUMN: &str = "Data.Protein";
/// Accepted names for the description column, in lookup order.
pub const DESCRIPTION_COLUMNS: [&str; 2] = ["Data.Description", "Description"];

// ---------------------------------------------------------------------------
// FoodRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single food item. Numeric fields are `None` when the cell was empty or
/// held an NA marker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodRecord {
    pub description: Option<String>,
    pub kilocalories: Option<f64>,
    pub fat_total_lipid: Option<f64>,
    pub protein: Option<f64>,
}

// ---------------------------------------------------------------------------
// FoodTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All rows of the source file in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodTable {
    /// Every header of the source file, including the unused ones.
    pub columns: Vec<String>,
    pub records: Vec<FoodRecord>,
}

impl FoodTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Present values of one numeric field, skipping missing cells.
    pub fn present_values(&self, field: impl Fn(&FoodRecord) -> Option<f64>) -> Vec<f64> {
        self.records.iter().filter_map(field).collect()
    }
}

// ---------------------------------------------------------------------------
// HealthGoal – the derived label
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HealthGoal {
    FatLoss,
    WeightGain,
    Dieting,
    GeneralHealth,
}

impl HealthGoal {
    pub const ALL: [HealthGoal; 4] = [
        HealthGoal::FatLoss,
        HealthGoal::WeightGain,
        HealthGoal::Dieting,
        HealthGoal::GeneralHealth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HealthGoal::FatLoss => "Fat Loss (Preserve Muscle)",
            HealthGoal::WeightGain => "Weight Gain (Muscle Focus)",
            HealthGoal::Dieting => "Dieting",
            HealthGoal::GeneralHealth => "General Health",
        }
    }

    pub fn from_label(label: &str) -> Option<HealthGoal> {
        HealthGoal::ALL.into_iter().find(|g| g.label() == label)
    }
}

impl fmt::Display for HealthGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LabeledTable – table + thresholds + one label per row
// ---------------------------------------------------------------------------

/// Result of one classification pass. `labels[i]` belongs to
/// `table.records[i]` and is `None` when that record misses a numeric field.
#[derive(Debug, Clone)]
pub struct LabeledTable {
    pub table: Arc<FoodTable>,
    pub thresholds: Thresholds,
    pub labels: Vec<Option<HealthGoal>>,
}

impl LabeledTable {
    pub fn iter(&self) -> impl Iterator<Item = (&FoodRecord, Option<HealthGoal>)> {
        self.table.records.iter().zip(self.labels.iter().copied())
    }

    /// Number of records per goal; every goal is present, possibly with 0.
    pub fn goal_counts(&self) -> BTreeMap<HealthGoal, usize> {
        let mut counts: BTreeMap<HealthGoal, usize> =
            HealthGoal::ALL.iter().map(|g| (*g, 0)).collect();
        for goal in self.labels.iter().flatten() {
            *counts.entry(*goal).or_default() += 1;
        }
        counts
    }

    /// Records left without a label.
    pub fn unlabeled(&self) -> usize {
        self.labels.iter().filter(|l| l.is_none()).count()
    }
}
