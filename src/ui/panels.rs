use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Left side panel – navigation and summary
// ---------------------------------------------------------------------------

/// Render the left panel: page selector, then a read-only data summary.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Navigation");
    ui.separator();

    ui.strong("Choose a page");
    let mut selected = None;
    egui::ComboBox::from_id_salt("page_select")
        .selected_text(state.page.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for page in Page::ALL {
                if ui.selectable_label(state.page == page, page.label()).clicked() {
                    selected = Some(page);
                }
            }
        });
    if let Some(page) = selected {
        log::debug!("Navigating to {:?}", page);
        state.navigate(page);
    }

    ui.add_space(8.0);
    ui.heading("Summary");
    ui.separator();

    let Some(analysis) = &state.analysis else {
        ui.label("No dataset loaded.");
        return;
    };
    let labeled = &analysis.labeled;

    ui.label(format!("{} foods loaded", labeled.table.len()));
    ui.add_space(4.0);

    ui.push_id("thresholds", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::remainder())
            .column(Column::auto())
            .header(18.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Threshold");
                });
                header.col(|ui| {
                    ui.strong("Value");
                });
            })
            .body(|mut body| {
                for (name, value) in labeled.thresholds.entries() {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(name);
                        });
                        row.col(|ui| {
                            ui.monospace(format!("{value:.2}"));
                        });
                    });
                }
            });
    });

    ui.add_space(8.0);

    ui.push_id("goal_counts", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::remainder())
            .column(Column::auto())
            .header(18.0, |mut header| {
                header.col(|ui| {
                    ui.strong(state.layout.legend_title);
                });
                header.col(|ui| {
                    ui.strong("Foods");
                });
            })
            .body(|mut body| {
                for (goal, count) in labeled.goal_counts() {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            let color = state.colors.color_for(goal).to_opaque();
                            ui.label(RichText::new(goal.label()).color(color));
                        });
                        row.col(|ui| {
                            ui.monospace(count.to_string());
                        });
                    });
                }
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.weak("Incomplete rows");
                    });
                    row.col(|ui| {
                        ui.monospace(labeled.unlabeled().to_string());
                    });
                });
            });
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new(state.data_path.display().to_string()).monospace());

        if let Some(analysis) = &state.analysis {
            ui.separator();
            let plotted: usize = analysis.series.values().map(Vec::len).sum();
            ui.label(format!(
                "{} foods loaded, {} plotted",
                analysis.labeled.table.len(),
                plotted
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
