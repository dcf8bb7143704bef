//! Linear RGB interpolation driving every gradient fill in the asset set.

use image::Rgba;
use std::str::FromStr;

/// Interpolate between two colors at `ratio`, channel by channel.
///
/// The ratio is clamped to `[0, 1]`, so out-of-range input picks the nearest
/// endpoint rather than failing. Channels (alpha included) are rounded to the
/// nearest integer, which keeps `interpolate(a, b, 0.0) == a` and
/// `interpolate(a, b, 1.0) == b` exact.
pub fn interpolate(a: Rgba<u8>, b: Rgba<u8>, ratio: f32) -> Rgba<u8> {
    let t = ratio.clamp(0.0, 1.0);
    let mut out = [0u8; 4];
    for (i, channel) in out.iter_mut().enumerate() {
        let from = a[i] as f32;
        let to = b[i] as f32;
        *channel = (from + (to - from) * t).round().clamp(0.0, 255.0) as u8;
    }
    Rgba(out)
}

/// A pair of gradient endpoints. `at(0.0)` is `start`, `at(1.0)` is `end`.
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    pub start: Rgba<u8>,
    pub end: Rgba<u8>,
}

impl Gradient {
    pub fn at(&self, ratio: f32) -> Rgba<u8> {
        interpolate(self.start, self.end, ratio)
    }
}

/// Parse a CSS color string, falling back to `fallback` when it doesn't parse.
pub fn parse_css_color(value: &str, fallback: Rgba<u8>) -> Rgba<u8> {
    css_color::Srgb::from_str(value)
        .map(|color| {
            Rgba([
                (color.red * 255.) as u8,
                (color.green * 255.) as u8,
                (color.blue * 255.) as u8,
                255,
            ])
        })
        .unwrap_or(fallback)
}

/// The Tailwind-derived palette shared by the launcher icon and the store
/// graphics.
pub mod palette {
    use image::Rgba;

    pub const INDIGO_600: Rgba<u8> = Rgba([79, 70, 229, 255]); // #4f46e5
    pub const VIOLET_600: Rgba<u8> = Rgba([124, 58, 237, 255]); // #7c3aed
    pub const BLUE_600: Rgba<u8> = Rgba([37, 99, 235, 255]); // #2563eb
    pub const RED_600: Rgba<u8> = Rgba([220, 38, 38, 255]); // #dc2626
    pub const GRAY_400: Rgba<u8> = Rgba([156, 163, 175, 255]); // #9ca3af
    pub const GRAY_500: Rgba<u8> = Rgba([107, 114, 128, 255]); // #6b7280
    pub const GRAY_800: Rgba<u8> = Rgba([31, 41, 55, 255]); // #1f2937
    pub const INDIGO_200: Rgba<u8> = Rgba([199, 210, 254, 255]); // #c7d2fe
    pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    pub const CREAM: Rgba<u8> = Rgba([245, 240, 230, 255]);
}
