use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Write a synthetic nutrition table in the layout the viewer expects.
#[derive(Parser, Debug)]
#[command(name = "generate_sample", about = "Write a synthetic food.csv")]
struct Args {
    /// Number of food rows.
    #[arg(long, default_value_t = 600)]
    rows: usize,
    /// PRNG seed; the same seed always produces the same file.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value = "food.csv")]
    out: PathBuf,
    /// Share of rows whose protein cell is left empty.
    #[arg(long, default_value_t = 0.03)]
    missing_rate: f64,
}

/// Food group with typical per-100g values: (kcal, fat g, protein g).
struct Group {
    category: &'static str,
    items: &'static [&'static str],
    profile: (f64, f64, f64),
}

const GROUPS: &[Group] = &[
    Group {
        category: "Vegetables",
        items: &["CELERY,RAW", "SPINACH,RAW", "BROCCOLI,BOILED", "CARROTS,RAW", "KALE,RAW"],
        profile: (35.0, 0.4, 2.2),
    },
    Group {
        category: "Fruits",
        items: &["APPLES,RAW", "BANANAS,RAW", "STRAWBERRIES,RAW", "ORANGES,RAW"],
        profile: (60.0, 0.3, 0.8),
    },
    Group {
        category: "Lean Protein",
        items: &["CHICKEN,BREAST,ROASTED", "TUNA,CANNED IN WATER", "EGG,WHITE", "COD,BAKED"],
        profile: (110.0, 2.0, 24.0),
    },
    Group {
        category: "Red Meat",
        items: &["BEEF,RIBEYE,GRILLED", "PORK,LOIN,ROASTED", "LAMB,LEG,ROASTED"],
        profile: (290.0, 19.0, 27.0),
    },
    Group {
        category: "Nuts and Seeds",
        items: &["ALMONDS", "PEANUT BUTTER,SMOOTH", "SUNFLOWER SEEDS,DRIED"],
        profile: (590.0, 50.0, 22.0),
    },
    Group {
        category: "Grains",
        items: &["RICE,WHITE,COOKED", "OATS,ROLLED", "BREAD,WHOLE-WHEAT", "PASTA,COOKED"],
        profile: (220.0, 2.5, 7.0),
    },
    Group {
        category: "Dairy",
        items: &["MILK,WHOLE", "CHEESE,CHEDDAR", "YOGURT,GREEK,PLAIN,NONFAT"],
        profile: (180.0, 11.0, 12.0),
    },
];

/// Multiplicative jitter in [1 - spread, 1 + spread], never below zero.
fn jitter(rng: &mut StdRng, value: f64, spread: f64) -> f64 {
    (value * (1.0 + rng.random_range(-spread..=spread))).max(0.0)
}

/// Build the data rows; the same seed always yields the same rows.
fn food_rows(rows: usize, seed: u64, missing_rate: f64) -> Vec<[String; 6]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows)
        .map(|row| {
            let group = &GROUPS[rng.random_range(0..GROUPS.len())];
            let item = group.items[rng.random_range(0..group.items.len())];
            let (kcal, fat, protein) = group.profile;

            let protein_cell = if rng.random_bool(missing_rate.clamp(0.0, 1.0)) {
                String::new()
            } else {
                format!("{:.2}", jitter(&mut rng, protein, 0.35))
            };

            [
                group.category.to_string(),
                format!("{item} #{}", row + 1),
                (1000 + row).to_string(),
                format!("{:.0}", jitter(&mut rng, kcal, 0.4)),
                format!("{:.2}", jitter(&mut rng, fat, 0.5)),
                protein_cell,
            ]
        })
        .collect()
}

const HEADER: [&str; 6] = [
    "Category",
    "Description",
    "Nutrient Data Bank Number",
    "Data.Kilocalories",
    "Data.Fat.Total Lipid",
    "Data.Protein",
];

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let rows = food_rows(args.rows, args.seed, args.missing_rate);

    let mut writer = csv::Writer::from_path(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    writer.write_record(HEADER)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush().context("flushing CSV")?;

    let missing = rows.iter().filter(|r| r[5].is_empty()).count();
    log::info!("{missing} rows written without protein");
    println!("Wrote {} foods to {}", rows.len(), args.out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_rows() {
        assert_eq!(food_rows(50, 7, 0.1), food_rows(50, 7, 0.1));
        assert_ne!(food_rows(50, 7, 0.1), food_rows(50, 8, 0.1));
    }

    #[test]
    fn rows_match_header_and_stay_non_negative() {
        for row in food_rows(200, 42, 0.0) {
            assert_eq!(row.len(), HEADER.len());
            for cell in &row[3..] {
                assert!(cell.parse::<f64>().unwrap() >= 0.0);
            }
        }
    }

    #[test]
    fn missing_rate_blanks_protein() {
        assert!(food_rows(100, 1, 1.0).iter().all(|r| r[5].is_empty()));
        assert!(food_rows(100, 1, 0.0).iter().all(|r| !r[5].is_empty()));
    }
}
