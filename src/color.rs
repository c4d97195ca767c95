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
// Color mapping: layer label → Color32
// ---------------------------------------------------------------------------

/// Maps the dataset's layer labels to distinct colours for the table badges.
#[derive(Debug, Clone, Default)]
pub struct LayerColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl LayerColors {
    /// Build a colour map from the sorted layer option set.
    pub fn new(layers: &[String]) -> Self {
        let palette = generate_palette(layers.len());
        let mapping: BTreeMap<String, Color32> = layers
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        LayerColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a layer label. Labels outside the selectable
    /// set (including "Unknown") get the neutral default.
    pub fn color_for(&self, layer: &str) -> Color32 {
        self.mapping
            .get(layer)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Return the legend entries (label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(l, c)| (l.clone(), *c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_layers_get_distinct_colors() {
        let layers = vec!["Advanced".to_owned(), "Basic".to_owned(), "Intermediate".to_owned()];
        let colors = LayerColors::new(&layers);
        let a = colors.color_for("Advanced");
        let b = colors.color_for("Basic");
        let c = colors.color_for("Intermediate");
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(colors.legend_entries().len(), 3);
    }

    #[test]
    fn unknown_layer_gets_the_default() {
        let colors = LayerColors::new(&["Basic".to_owned()]);
        assert_eq!(colors.color_for("Unknown"), Color32::GRAY);
    }
}
