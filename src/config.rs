use std::path::PathBuf;

use clap::Parser;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Parser, Debug, Clone)]
#[command(name = "nutrition-viewer", version, about = "Browse foods by health goal")]
pub struct Cli {
    /// CSV file with the nutrition table.
    #[arg(long, env = "NUTRITION_DATA", default_value = "food.csv")]
    pub data: PathBuf,
}

// ---------------------------------------------------------------------------
// Chart layout
// ---------------------------------------------------------------------------

/// Fixed rendering options of the visualization page.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub legend_title: &'static str,
    pub opacity: f32,
    pub point_radius: f32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
            font_size: 14.0,
            title: "Calories vs Protein by Health Goal",
            x_title: "Calories",
            y_title: "Protein (g)",
            legend_title: "Health Goal",
            opacity: 0.7,
            point_radius: 3.0,
        }
    }
}
