use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::color::GoalColors;
use crate::config::ChartLayout;
use crate::data::classify::label_table;
use crate::data::filter::{plottable_series, GoalSeries};
use crate::data::loader::load_cached;
use crate::data::model::LabeledTable;
use crate::data::thresholds::Thresholds;

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    Visualization,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Landing, Page::Visualization];

    pub fn label(self) -> &'static str {
        match self {
            Page::Landing => "Landing Page",
            Page::Visualization => "Interactive Visualization",
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline output
// ---------------------------------------------------------------------------

/// Everything the pages render, rebuilt on every navigation.
pub struct Analysis {
    pub labeled: LabeledTable,
    pub series: GoalSeries,
}

/// Load (cached) → thresholds → labels → plot series.
pub fn run_pipeline(path: &Path) -> Result<Analysis> {
    let table = load_cached(path)
        .with_context(|| format!("loading food table from {}", path.display()))?;
    if table.is_empty() {
        log::warn!("{} has no food records", path.display());
    }
    let thresholds = Thresholds::compute(&table);
    let labeled = label_table(table, thresholds);
    let series = plottable_series(&labeled);

    log::info!(
        "Classified {} records ({} unlabeled), {} plottable",
        labeled.table.len(),
        labeled.unlabeled(),
        series.values().map(Vec::len).sum::<usize>()
    );
    Ok(Analysis { labeled, series })
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub data_path: PathBuf,
    pub page: Page,
    pub layout: ChartLayout,
    pub colors: GoalColors,

    /// Result of the last pipeline run (None after a failure).
    pub analysis: Option<Analysis>,

    /// Error shown in place of the page.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(data_path: PathBuf) -> Self {
        let layout = ChartLayout::default();
        let colors = GoalColors::new(layout.opacity);
        let mut state = Self {
            data_path,
            page: Page::default(),
            layout,
            colors,
            analysis: None,
            status_message: None,
        };
        state.refresh();
        state
    }

    /// Switch page and rerun the pipeline.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        self.refresh();
    }

    pub fn refresh(&mut self) {
        match run_pipeline(&self.data_path) {
            Ok(analysis) => {
                self.analysis = Some(analysis);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load data: {e:#}");
                self.analysis = None;
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::model::HealthGoal;

    const CSV: &str = "\
Description,Data.Kilocalories,Data.Fat.Total Lipid,Data.Protein
Whey isolate,90,1,25
Celery,15,0.2,0.7
Ribeye,480,38,36
Rice,130,0.3,2.7
Peanut butter,590,50,25
Mystery,100,2,
";

    fn csv_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn starts_on_landing_page_with_data_loaded() {
        let file = csv_file();
        let state = AppState::new(file.path().to_path_buf());
        assert_eq!(state.page, Page::Landing);
        assert!(state.status_message.is_none());
        assert_eq!(state.analysis.as_ref().unwrap().labeled.table.len(), 6);
    }

    #[test]
    fn navigation_reruns_pipeline_on_cached_table() {
        let file = csv_file();
        let mut state = AppState::new(file.path().to_path_buf());
        let before = state.analysis.as_ref().unwrap().labeled.labels.clone();

        state.navigate(Page::Visualization);
        assert_eq!(state.page, Page::Visualization);
        let analysis = state.analysis.as_ref().unwrap();
        assert_eq!(analysis.labeled.labels, before);

        let plotted: usize = analysis.series.values().map(Vec::len).sum();
        assert_eq!(plotted, 5);
        assert!(analysis
            .series
            .values()
            .flatten()
            .all(|p| p.description != "Mystery"));
    }

    #[test]
    fn pipeline_labels_sample_foods() {
        let file = csv_file();
        let analysis = run_pipeline(file.path()).unwrap();
        let labels: Vec<Option<HealthGoal>> = analysis.labeled.labels.clone();
        assert_eq!(labels[0], Some(HealthGoal::FatLoss));
        assert_eq!(labels[2], Some(HealthGoal::WeightGain));
        assert_eq!(labels[5], None);
    }

    #[test]
    fn header_only_file_yields_empty_analysis() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Description,Data.Kilocalories,Data.Fat.Total Lipid,Data.Protein\n")
            .unwrap();
        file.flush().unwrap();

        let analysis = run_pipeline(file.path()).unwrap();
        assert!(analysis.labeled.table.is_empty());
        assert!(analysis.series.is_empty());
        assert!(analysis.labeled.thresholds.low_cal.is_nan());
    }

    #[test]
    fn load_failure_becomes_status_message() {
        let state = AppState::new(PathBuf::from("/nonexistent/food.csv"));
        assert!(state.analysis.is_none());
        let msg = state.status_message.unwrap();
        assert!(msg.starts_with("Error: loading food table"));
        assert!(msg.contains("cannot open"));
    }

    #[test]
    fn page_labels_match_navigation_options() {
        let labels: Vec<&str> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["Landing Page", "Interactive Visualization"]);
    }
}
