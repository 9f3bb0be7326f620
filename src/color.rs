use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Colour of the divergence line.
pub const DIVERGENCE_COLOR: Color32 = Color32::from_rgb(255, 165, 0);
pub const CHAOTIC_COLOR: Color32 = Color32::from_rgb(220, 80, 60);
pub const STABLE_COLOR: Color32 = Color32::from_rgb(80, 170, 90);

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
            let hsl = Hsl::new(hue, 0.75, 0.55);
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
// Series name → Color32
// ---------------------------------------------------------------------------

/// One distinct colour per series, assigned in column order.
#[derive(Debug, Clone)]
pub struct SeriesPalette {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl SeriesPalette {
    pub fn new(names: &[&str]) -> Self {
        let mapping = names
            .iter()
            .zip(generate_palette(names.len()))
            .map(|(name, c)| (name.to_string(), c))
            .collect();

        SeriesPalette {
            mapping,
            default_color: Color32::LIGHT_BLUE,
        }
    }

    pub fn color_for(&self, name: &str) -> Color32 {
        self.mapping
            .get(name)
            .copied()
            .unwrap_or(self.default_color)
    }
}

pub fn label_color(chaotic: bool) -> Color32 {
    if chaotic {
        CHAOTIC_COLOR
    } else {
        STABLE_COLOR
    }
}
