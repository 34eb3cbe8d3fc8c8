use eframe::egui::{self, RichText, ScrollArea, TextStyle, Ui};
use egui_plot::{MarkerShape, Plot, PlotPoint, PlotPoints, Points};

use crate::data::filter::describe_point;
use crate::data::model::HealthGoal;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Calories vs protein scatter (visualization page)
// ---------------------------------------------------------------------------

/// Render the visualization page.
pub fn visualization_page(ui: &mut Ui, state: &AppState) {
    let layout = &state.layout;

    for (text_style, font) in ui.style_mut().text_styles.iter_mut() {
        if matches!(
            text_style,
            TextStyle::Body | TextStyle::Button | TextStyle::Monospace
        ) {
            font.size = layout.font_size;
        }
    }

    ui.heading(RichText::new("Calories vs Protein: Interactive Visualization").size(24.0));

    let Some(analysis) = &state.analysis else {
        return;
    };
    let series = &analysis.series;

    ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.label(RichText::new(layout.title).strong().size(layout.font_size + 4.0));
            if series.is_empty() {
                ui.weak("No complete records to plot.");
            }

            ui.horizontal_top(|ui: &mut Ui| {
                Plot::new("food_scatter")
                    .width(layout.width)
                    .height(layout.height)
                    .x_axis_label(layout.x_title)
                    .y_axis_label(layout.y_title)
                    .allow_boxed_zoom(true)
                    .allow_drag(true)
                    .allow_scroll(true)
                    .allow_zoom(true)
                    .label_formatter(|name, value: &PlotPoint| {
                        let coords = format!(
                            "{}: {:.1}\n{}: {:.1}",
                            layout.x_title, value.x, layout.y_title, value.y
                        );
                        let descriptions = HealthGoal::from_label(name)
                            .map(|goal| describe_point(series, goal, value.x, value.y))
                            .unwrap_or_default();
                        if descriptions.is_empty() {
                            coords
                        } else {
                            format!("{}\n{name}\n{coords}", descriptions.join("\n"))
                        }
                    })
                    .show(ui, |plot_ui| {
                        for (goal, points) in series {
                            let xy: PlotPoints =
                                points.iter().map(|p| [p.calories, p.protein]).collect();
                            plot_ui.points(
                                Points::new(xy)
                                    .name(goal.label())
                                    .color(state.colors.color_for(*goal))
                                    .shape(MarkerShape::Circle)
                                    .filled(true)
                                    .radius(layout.point_radius),
                            );
                        }
                    });

                ui.add_space(12.0);
                legend(ui, state);
            });
        });
}

fn legend(ui: &mut Ui, state: &AppState) {
    ui.vertical(|ui: &mut Ui| {
        ui.strong(state.layout.legend_title);
        for (goal, color) in state.colors.legend_entries() {
            ui.horizontal(|ui: &mut Ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 5.0, color);
                ui.label(goal.label());
            });
        }
    });
}
