use std::collections::BTreeMap;

use super::model::{HealthGoal, LabeledTable};

// ---------------------------------------------------------------------------
// Plottable subset of the labeled table
// ---------------------------------------------------------------------------

/// One scatter point with its hover text.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodPoint {
    pub calories: f64,
    pub protein: f64,
    pub description: String,
}

/// Points grouped into one series per goal, in table order.
pub type GoalSeries = BTreeMap<HealthGoal, Vec<FoodPoint>>;

/// Keep the records that have calories, protein, a label and a description.
///
/// Goals without any point are absent from the map.
pub fn plottable_series(labeled: &LabeledTable) -> GoalSeries {
    let mut series = GoalSeries::new();
    for (record, goal) in labeled.iter() {
        let (Some(calories), Some(protein), Some(goal), Some(description)) = (
            record.kilocalories,
            record.protein,
            goal,
            record.description.as_ref(),
        ) else {
            continue;
        };
        series.entry(goal).or_default().push(FoodPoint {
            calories,
            protein,
            description: description.clone(),
        });
    }
    series
}

/// Descriptions of every point of `goal` sitting exactly at (`x`, `y`),
/// in table order.
pub fn describe_point(series: &GoalSeries, goal: HealthGoal, x: f64, y: f64) -> Vec<&str> {
    series
        .get(&goal)
        .into_iter()
        .flatten()
        .filter(|p| p.calories == x && p.protein == y)
        .map(|p| p.description.as_str())
        .collect()
}
