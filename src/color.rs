use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.7, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fleet colour assignment
// ---------------------------------------------------------------------------

/// Maps each fleet name to a stable, distinct colour so every chart uses the
/// same colour for the same fleet.
#[derive(Debug, Clone, Default)]
pub struct FleetColors {
    mapping: BTreeMap<String, Color32>,
}

impl FleetColors {
    /// Assign colours to fleets in their given (first-occurrence) order.
    pub fn new(fleets: &[String]) -> Self {
        let palette = generate_palette(fleets.len());
        FleetColors {
            mapping: fleets
                .iter()
                .cloned()
                .zip(palette)
                .collect(),
        }
    }

    /// Colour for a fleet; grey for fleets that were not in the dataset.
    pub fn color_for(&self, fleet: &str) -> Color32 {
        self.mapping.get(fleet).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_distinct() {
        let palette = generate_palette(6);
        assert_eq!(palette.len(), 6);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn fleet_colors_are_stable_and_default_grey() {
        let fleets = vec!["DAF".to_string(), "MACK".to_string()];
        let colors = FleetColors::new(&fleets);
        assert_eq!(colors.color_for("DAF"), colors.color_for("DAF"));
        assert_ne!(colors.color_for("DAF"), colors.color_for("MACK"));
        assert_eq!(colors.color_for("VOLVO"), Color32::GRAY);
    }
}
