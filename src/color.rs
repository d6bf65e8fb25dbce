use palette::{FromColor, Hsl, Srgb};
use plotters::style::RGBColor;

/// Hue wheel sampled at evenly spaced angles with a fixed saturation and
/// lightness, so neighbouring slices or bars stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub saturation: f32,
    pub lightness: f32,
}

impl Palette {
    /// Soft fills for pie slices; black labels stay readable on top.
    pub const SLICES: Palette = Palette {
        saturation: 0.65,
        lightness: 0.65,
    };

    /// Stronger fills for bars against the white plot background.
    pub const BARS: Palette = Palette {
        saturation: 0.75,
        lightness: 0.5,
    };

    /// `n` colours, starting at red and walking the hue circle.
    pub fn colors(&self, n: usize) -> Vec<RGBColor> {
        let step = 360.0 / n.max(1) as f32;
        (0..n)
            .map(|i| {
                let hsl = Hsl::new(i as f32 * step, self.saturation, self.lightness);
                let rgb = Srgb::from_color(hsl).into_format::<u8>();
                RGBColor(rgb.red, rgb.green, rgb.blue)
            })
            .collect()
    }
}
