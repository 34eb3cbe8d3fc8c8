use super::model::FoodTable;

pub const LOW_QUANTILE: f64 = 0.33;
pub const HIGH_QUANTILE: f64 = 0.67;

// ---------------------------------------------------------------------------
// Quantile
// ---------------------------------------------------------------------------

/// Linear-interpolation quantile of `values`, ignoring NaN.
///
/// The sorted values are indexed at `q * (n - 1)`; a fractional position
/// interpolates between its two neighbours. Returns `None` when no value is
/// left after dropping NaN.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

// ---------------------------------------------------------------------------
// Threshold set
// ---------------------------------------------------------------------------

/// Cutoffs shared by every classification of one load.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Thresholds {
    pub low_cal: f64,
    pub high_cal: f64,
    pub low_fat: f64,
    pub mid_fat: f64,
    pub high_protein: f64,
}

impl Thresholds {
    /// Compute the cutoffs from the full, unfiltered table.
    ///
    /// A column without any present value yields NaN, which fails every
    /// comparison in the classifier.
    pub fn compute(table: &FoodTable) -> Self {
        let calories = table.present_values(|r| r.kilocalories);
        let fat = table.present_values(|r| r.fat_total_lipid);
        let protein = table.present_values(|r| r.protein);

        let thresholds = Thresholds {
            low_cal: column_quantile(&calories, LOW_QUANTILE, "calories"),
            high_cal: column_quantile(&calories, HIGH_QUANTILE, "calories"),
            low_fat: column_quantile(&fat, LOW_QUANTILE, "fat"),
            mid_fat: column_quantile(&fat, HIGH_QUANTILE, "fat"),
            high_protein: column_quantile(&protein, HIGH_QUANTILE, "protein"),
        };
        log::debug!("Computed thresholds {thresholds:?}");
        thresholds
    }

    /// Label / value pairs for the summary table.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("Low calories (33%)", self.low_cal),
            ("High calories (67%)", self.high_cal),
            ("Low fat (33%)", self.low_fat),
            ("Mid fat (67%)", self.mid_fat),
            ("High protein (67%)", self.high_protein),
        ]
    }
}

fn column_quantile(values: &[f64], q: f64, column: &str) -> f64 {
    quantile(values, q).unwrap_or_else(|| {
        log::warn!("No {column} values present; threshold is undefined");
        f64::NAN
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::FoodRecord;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn record(kcal: f64, fat: f64, protein: f64) -> FoodRecord {
        FoodRecord {
            description: Some("food".into()),
            kilocalories: Some(kcal),
            fat_total_lipid: Some(fat),
            protein: Some(protein),
        }
    }

    #[test]
    fn quantile_interpolates_between_neighbours() {
        let values = [4.0, 1.0, 3.0, 2.0];
        assert!(approx(quantile(&values, 0.33).unwrap(), 1.99));
        assert!(approx(quantile(&values, 0.67).unwrap(), 3.01));
        assert!(approx(quantile(&values, 0.0).unwrap(), 1.0));
        assert!(approx(quantile(&values, 1.0).unwrap(), 4.0));
    }

    #[test]
    fn quantile_hits_exact_order_statistic() {
        let values = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert!(approx(quantile(&values, 0.5).unwrap(), 30.0));
        assert!(approx(quantile(&values, 0.25).unwrap(), 20.0));
    }

    #[test]
    fn quantile_ignores_nan_and_handles_empty() {
        assert_eq!(quantile(&[], 0.5), None);
        assert_eq!(quantile(&[f64::NAN], 0.5), None);
        assert!(approx(quantile(&[f64::NAN, 7.0], 0.67).unwrap(), 7.0));
    }

    #[test]
    fn constant_columns_collapse_to_the_constant() {
        let table = FoodTable {
            columns: vec![],
            records: vec![record(50.0, 1.0, 30.0); 3],
        };
        let t = Thresholds::compute(&table);
        assert_eq!(t.low_cal, 50.0);
        assert_eq!(t.high_cal, 50.0);
        assert_eq!(t.low_fat, 1.0);
        assert_eq!(t.mid_fat, 1.0);
        assert_eq!(t.high_protein, 30.0);
    }

    #[test]
    fn low_cutoffs_never_exceed_high_cutoffs() {
        let table = FoodTable {
            columns: vec![],
            records: vec![
                record(120.0, 3.0, 12.0),
                record(15.0, 0.1, 0.4),
                record(560.0, 41.0, 25.0),
                record(250.0, 9.5, 18.0),
                record(80.0, 0.9, 2.1),
                record(390.0, 22.0, 31.0),
            ],
        };
        let t = Thresholds::compute(&table);
        assert!(t.low_cal <= t.high_cal);
        assert!(t.low_fat <= t.mid_fat);
    }

    #[test]
    fn missing_cells_are_left_out_of_the_distribution() {
        let mut sparse = record(0.0, 0.0, 0.0);
        sparse.kilocalories = None;
        let table = FoodTable {
            columns: vec![],
            records: vec![record(100.0, 1.0, 1.0), sparse, record(100.0, 1.0, 1.0)],
        };
        let t = Thresholds::compute(&table);
        assert_eq!(t.low_cal, 100.0);
        assert_eq!(t.high_cal, 100.0);
    }

    #[test]
    fn empty_column_yields_nan() {
        let table = FoodTable::default();
        let t = Thresholds::compute(&table);
        assert!(t.low_cal.is_nan());
        assert!(t.high_protein.is_nan());
    }
}
