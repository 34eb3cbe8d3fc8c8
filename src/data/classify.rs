use std::sync::Arc;

use super::model::{FoodRecord, FoodTable, HealthGoal, LabeledTable};
use super::thresholds::Thresholds;

// ---------------------------------------------------------------------------
// Rule-based health goal classifier
// ---------------------------------------------------------------------------

/// Map one food's numbers to a goal. Rules are checked in order and the
/// first match wins:
///
/// 1. low calories, high protein, fat at most `mid_fat` → Fat Loss
/// 2. high calories, high protein → Weight Gain
/// 3. low calories, low fat → Dieting
/// 4. anything else → General Health
pub fn classify(calories: f64, fat: f64, protein: f64, t: &Thresholds) -> HealthGoal {
    if calories <= t.low_cal && protein >= t.high_protein && fat <= t.mid_fat {
        HealthGoal::FatLoss
    } else if calories >= t.high_cal && protein >= t.high_protein {
        HealthGoal::WeightGain
    } else if calories <= t.low_cal && fat <= t.low_fat {
        HealthGoal::Dieting
    } else {
        HealthGoal::GeneralHealth
    }
}

/// `None` when calories, fat or protein is missing.
pub fn classify_record(record: &FoodRecord, t: &Thresholds) -> Option<HealthGoal> {
    Some(classify(
        record.kilocalories?,
        record.fat_total_lipid?,
        record.protein?,
        t,
    ))
}

/// Label every record of `table` against `thresholds`.
pub fn label_table(table: Arc<FoodTable>, thresholds: Thresholds) -> LabeledTable {
    let labels = table
        .records
        .iter()
        .map(|r| classify_record(r, &thresholds))
        .collect();

    LabeledTable {
        table,
        thresholds,
        labels,
    }
}
