use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Fixed colors for the two outcome segments.
pub const SUCCESS_COLOR: Color32 = Color32::from_rgb(46, 174, 93);
pub const FAILURE_COLOR: Color32 = Color32::from_rgb(214, 68, 68);

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.70, 0.55);
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
// Color mapping: booster variant → Color32
// ---------------------------------------------------------------------------

/// Maps the dataset's booster variants to distinct, stable colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map over the given labels (sorted, distinct).
    pub fn new(labels: &[String]) -> Self {
        let palette = generate_palette(labels.len());
        let mapping: BTreeMap<String, Color32> =
            labels.iter().cloned().zip(palette.into_iter()).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a label; unknown labels get the default.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Legend entries (label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(label, color)| (label.clone(), *color))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_distinct() {
        let palette = generate_palette(5);
        assert_eq!(palette.len(), 5);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn mapping_is_stable_and_total() {
        let labels = vec!["B4".to_string(), "FT".to_string(), "v1.0".to_string()];
        let map = ColorMap::new(&labels);
        assert_eq!(map.color_for("FT"), map.color_for("FT"));
        assert_ne!(map.color_for("FT"), map.color_for("B4"));
        assert_eq!(map.color_for("no such variant"), Color32::GRAY);
        assert_eq!(map.legend_entries().len(), 3);
    }

    #[test]
    fn empty_palette_is_fine() {
        assert!(generate_palette(0).is_empty());
    }
}
