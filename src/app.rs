use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Page};
use crate::ui::{landing, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct NutritionApp {
    pub state: AppState,
}

impl NutritionApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for NutritionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: data source / status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("nav_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(msg) = &self.state.status_message {
                load_error(ui, msg);
                return;
            }
            match self.state.page {
                Page::Landing => landing::landing_page(ui),
                Page::Visualization => plot::visualization_page(ui, &self.state),
            }
        });
    }
}

fn load_error(ui: &mut Ui, msg: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(RichText::new(msg).color(Color32::RED).size(16.0));
    });
}
