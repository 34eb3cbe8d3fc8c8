use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{FromColor, Hsl, Srgb};

use crate::data::model::HealthGoal;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// `n` colours spread evenly around the hue wheel, starting at `start_hue`.
pub fn generate_palette(n: usize, start_hue: f32) -> Vec<Color32> {
    let step = 360.0 / n.max(1) as f32;
    (0..n)
        .map(|i| {
            let hsl = Hsl::new(start_hue + step * i as f32, 0.7, 0.5);
            let rgb: Srgb<u8> = Srgb::from_color(hsl).into_format();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Goal → colour
// ---------------------------------------------------------------------------

/// Hue of the first goal; the rest follow at equal steps.
const GOAL_START_HUE: f32 = 200.0;

/// Fixed colour per health goal, with the point opacity baked in.
#[derive(Debug, Clone)]
pub struct GoalColors {
    mapping: BTreeMap<HealthGoal, Color32>,
}

impl GoalColors {
    pub fn new(opacity: f32) -> Self {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        let mapping = HealthGoal::ALL
            .into_iter()
            .zip(generate_palette(HealthGoal::ALL.len(), GOAL_START_HUE))
            .map(|(goal, c)| {
                (goal, Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), alpha))
            })
            .collect();
        GoalColors { mapping }
    }

    pub fn color_for(&self, goal: HealthGoal) -> Color32 {
        self.mapping.get(&goal).copied().unwrap_or(Color32::GRAY)
    }

    /// Legend entries in goal order.
    pub fn legend_entries(&self) -> Vec<(HealthGoal, Color32)> {
        self.mapping.iter().map(|(g, c)| (*g, *c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colors() {
        assert!(generate_palette(0, 0.0).is_empty());
        let colors = generate_palette(4, GOAL_START_HUE);
        assert_eq!(colors.len(), 4);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn every_goal_gets_a_translucent_color() {
        let colors = GoalColors::new(0.7);
        let entries = colors.legend_entries();
        assert_eq!(entries.len(), HealthGoal::ALL.len());
        for (goal, color) in entries {
            assert!((178..=179).contains(&color.a()));
            assert_eq!(colors.color_for(goal), color);
        }
    }
}
