use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use once_cell::sync::Lazy;
use thiserror::Error;

use super::model::{
    FoodRecord, FoodTable, CALORIES_COLUMN, DESCRIPTION_COLUMNS, FAT_COLUMN, PROTEIN_COLUMN,
};

/// Cell contents read as a missing value. Any spelling of NaN that the float
/// parser accepts is also treated as missing after parsing.
const NA_MARKERS: [&str; 17] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "null",
];

#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed CSV")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the food table from a CSV file.
pub fn load_table(path: &Path) -> Result<FoodTable, DataError> {
    let file = File::open(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file)
}

/// Parse CSV from any reader. The header row must name the calorie, fat,
/// protein and description columns; other columns are kept by name only.
pub fn load_reader<R: Read>(reader: R) -> Result<FoodTable, DataError> {
    let mut reader = csv::Reader::from_reader(reader);
    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let calories_idx = column_index(&columns, CALORIES_COLUMN)?;
    let fat_idx = column_index(&columns, FAT_COLUMN)?;
    let protein_idx = column_index(&columns, PROTEIN_COLUMN)?;
    let description_idx = DESCRIPTION_COLUMNS
        .iter()
        .find_map(|name| columns.iter().position(|h| h == name))
        .ok_or_else(|| DataError::MissingColumn(DESCRIPTION_COLUMNS[1].to_string()))?;

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result?;
        let field = |idx: usize| row.get(idx).unwrap_or("");

        let description = field(description_idx).trim();
        records.push(FoodRecord {
            description: (!description.is_empty()).then(|| description.to_string()),
            kilocalories: parse_cell(field(calories_idx), row_no, CALORIES_COLUMN)?,
            fat_total_lipid: parse_cell(field(fat_idx), row_no, FAT_COLUMN)?,
            protein: parse_cell(field(protein_idx), row_no, PROTEIN_COLUMN)?,
        });
    }

    Ok(FoodTable { columns, records })
}

fn column_index(columns: &[String], name: &str) -> Result<usize, DataError> {
    columns
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| DataError::MissingColumn(name.to_string()))
}

fn parse_cell(raw: &str, row: usize, column: &'static str) -> Result<Option<f64>, DataError> {
    let s = raw.trim();
    if s.is_empty() || NA_MARKERS.contains(&s) {
        return Ok(None);
    }
    s.parse::<f64>()
        .map(|v| (!v.is_nan()).then_some(v))
        .map_err(|_| DataError::InvalidNumber {
            row,
            column,
            value: s.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Load-once cache
// ---------------------------------------------------------------------------

/// Keeps every successfully loaded table for the life of the process.
/// Failed loads are not stored, so the next call tries again.
#[derive(Default)]
pub struct TableCache {
    entries: Mutex<HashMap<PathBuf, Arc<FoodTable>>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(&self, path: &Path) -> Result<Arc<FoodTable>, DataError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(table) = entries.get(path) {
            log::debug!("Cache hit for {}", path.display());
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(load_table(path)?);
        log::info!(
            "Loaded {} food records ({} columns) from {}",
            table.len(),
            table.columns.len(),
            path.display()
        );
        entries.insert(path.to_path_buf(), Arc::clone(&table));
        Ok(table)
    }
}

static TABLE_CACHE: Lazy<TableCache> = Lazy::new(TableCache::new);

/// Process-wide cached load.
pub fn load_cached(path: &Path) -> Result<Arc<FoodTable>, DataError> {
    TABLE_CACHE.get_or_load(path)
}
