use eframe::egui::{RichText, ScrollArea, Ui};

use crate::data::model::HealthGoal;

const OVERVIEW: &str = "This viewer sorts foods by the dietary objective they serve best, \
using nothing but their nutritional content. Each food is compared with the rest of the \
dataset: its calories, total fat and protein are placed against the 33rd and 67th \
percentiles of those columns, and a fixed set of rules turns that position into a goal.";

const RULES: [&str; 4] = [
    "low calories, high protein and moderate fat",
    "high calories and high protein",
    "low calories and low fat",
    "everything else",
];

const WHY: &str = "Reading nutrition labels one by one is slow and easy to get wrong. \
Labelling the whole table up front makes it quick to spot which foods match a goal.";

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

pub fn landing_page(ui: &mut Ui) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(RichText::new("Personalized Nutrition Recommender").size(28.0));
            ui.label(RichText::new("Food classification by health goal").size(18.0).weak());
            ui.separator();

            ui.strong("Project overview");
            ui.label(OVERVIEW);
            ui.add_space(6.0);

            ui.label("Every food receives exactly one of these goals, checked in this order:");
            for (goal, rule) in HealthGoal::ALL.iter().zip(RULES) {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label("•");
                    ui.strong(goal.label());
                    ui.label(format!("– {rule}"));
                });
            }
            ui.label("Foods missing calories, fat or protein are left unlabeled and not plotted.");

            ui.separator();
            ui.strong("Why does this matter?");
            ui.label(WHY);
            ui.add_space(6.0);
            ui.label(
                "Pick \"Interactive Visualization\" in the panel on the left to explore the results.",
            );
        });
}
