mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::NutritionApp;
use clap::Parser;
use config::Cli;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Using nutrition data at {}", cli.data.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1360.0, 900.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Nutrition Goal Classifier",
        options,
        Box::new(move |_cc| Ok(Box::new(NutritionApp::new(AppState::new(cli.data))))),
    )
}
