//! The drawing surface used by every renderer.
//!
//! [`Canvas`] wraps an [`RgbaImage`] together with the scale factor of the
//! current render, so a declarative 1024-reference layout can be replayed at
//! any output size. All primitives composite source-over, and circular edges
//! get a one-pixel anti-aliased rim.

use crate::gradient::Gradient;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Pixel, Rgba, RgbaImage,
};
use rusttype::{point, Font, Scale};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Reference point of a text string when positioning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    /// Place the bounding-box midpoint at the given coordinate.
    Center,
}

pub struct Canvas {
    pixels: RgbaImage,
    scale: f32,
}

impl Canvas {
    /// Transparent canvas at native scale.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])),
            scale: 1.0,
        }
    }

    /// Opaque canvas at native scale.
    pub fn with_background(width: u32, height: u32, color: Rgba<u8>) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, color),
            scale: 1.0,
        }
    }

    /// Transparent square canvas whose scale factor maps a `reference`-sized
    /// layout onto `size` pixels.
    pub fn scaled_to(size: u32, reference: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0])),
            scale: size as f32 / reference as f32,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    /// A linear measurement from the reference layout, scaled and rounded.
    pub fn px(&self, reference_units: f32) -> i32 {
        (reference_units * self.scale).round() as i32
    }

    /// Like [`px`](Self::px), but never below one pixel: a stroke that exists
    /// in the reference layout stays visible at the smallest density.
    pub fn stroke(&self, reference_units: f32) -> u32 {
        ((reference_units * self.scale).round() as u32).max(1)
    }

    fn blend(&mut self, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return;
        }
        let mut src = color;
        src[3] = (src[3] as f32 * coverage.clamp(0.0, 1.0)).round() as u8;
        self.pixels.get_pixel_mut(x as u32, y as u32).blend(&src);
    }

    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = color;
        }
    }

    /// Top-to-bottom gradient: row `y` takes the color at ratio `y / height`.
    pub fn fill_vertical_gradient(&mut self, gradient: &Gradient) {
        let height = self.height();
        for y in 0..height {
            let color = gradient.at(y as f32 / height as f32);
            for x in 0..self.width() {
                self.pixels.put_pixel(x, y, color);
            }
        }
    }

    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
        let (w, h) = (self.width() as i32, self.height() as i32);
        for y in y0.max(0)..=y1.min(h - 1) {
            for x in x0.max(0)..=x1.min(w - 1) {
                self.pixels.get_pixel_mut(x as u32, y as u32).blend(&color);
            }
        }
    }

    /// Rectangle outline; the stroke grows inward from the bounds. The four
    /// edge runs do not overlap, so translucent strokes blend exactly once
    /// per pixel.
    pub fn stroke_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, width: u32, color: Rgba<u8>) {
        let w = width as i32;
        self.fill_rect(x0, y0, x1, y0 + w - 1, color);
        self.fill_rect(x0, y1 - w + 1, x1, y1, color);
        self.fill_rect(x0, y0 + w, x0 + w - 1, y1 - w, color);
        self.fill_rect(x1 - w + 1, y0 + w, x1, y1 - w, color);
    }

    pub fn fill_rounded_rect(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        corner_radius: i32,
        color: Rgba<u8>,
    ) {
        let r = corner_radius.max(0);
        let rf = r as f32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let in_horizontal_core = x >= x0 + r && x <= x1 - r;
                let in_vertical_core = y >= y0 + r && y <= y1 - r;
                if in_horizontal_core || in_vertical_core {
                    self.blend(x, y, color, 1.0);
                    continue;
                }
                // Corner quadrant: distance from the nearest arc center.
                let cx = if x < x0 + r { x0 + r } else { x1 - r };
                let cy = if y < y0 + r { y0 + r } else { y1 - r };
                let dx = (x - cx) as f32;
                let dy = (y - cy) as f32;
                let d = (dx * dx + dy * dy).sqrt();
                if d > rf {
                    continue;
                }
                let coverage = if d > rf - 1.0 { rf - d } else { 1.0 };
                self.blend(x, y, color, coverage);
            }
        }
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgba<u8>) {
        if radius <= 0 {
            return;
        }
        let r = radius as f32;
        for y in cy - radius..=cy + radius {
            for x in cx - radius..=cx + radius {
                let dx = (x - cx) as f32;
                let dy = (y - cy) as f32;
                let d = (dx * dx + dy * dy).sqrt();
                if d > r {
                    continue;
                }
                let coverage = if d > r - 1.0 { r - d } else { 1.0 };
                self.blend(x, y, color, coverage);
            }
        }
    }

    /// Circle outline; the stroke grows inward from `radius`, matching the
    /// filled-disc edge it usually sits on.
    pub fn stroke_circle(&mut self, cx: i32, cy: i32, radius: i32, width: u32, color: Rgba<u8>) {
        if radius <= 0 {
            return;
        }
        let outer = radius as f32;
        let inner = (radius - width as i32) as f32;
        for y in cy - radius..=cy + radius {
            for x in cx - radius..=cx + radius {
                let dx = (x - cx) as f32;
                let dy = (y - cy) as f32;
                let d = (dx * dx + dy * dy).sqrt();
                if d > outer || d < inner - 1.0 {
                    continue;
                }
                let coverage = if d > outer - 1.0 {
                    outer - d
                } else if d < inner {
                    d - (inner - 1.0)
                } else {
                    1.0
                };
                self.blend(x, y, color, coverage);
            }
        }
    }

    /// Radial gradient built from concentric rings two pixels wide: the ring
    /// at distance `d` takes the gradient color at `ring_radius / radius`.
    /// The banding matches what repeated filled discs would produce, in a
    /// single pass over the bounding square.
    pub fn gradient_disc(&mut self, cx: i32, cy: i32, radius: i32, gradient: &Gradient) {
        if radius <= 0 {
            return;
        }
        let r = radius as f32;
        for y in cy - radius..=cy + radius {
            for x in cx - radius..=cx + radius {
                let dx = (x - cx) as f32;
                let dy = (y - cy) as f32;
                let d = (dx * dx + dy * dy).sqrt();
                if d > r {
                    continue;
                }
                let mut ring = d.ceil() as i32;
                if (radius - ring) % 2 != 0 {
                    ring += 1;
                }
                let color = gradient.at(ring.min(radius) as f32 / r);
                let coverage = if d > r - 1.0 { r - d } else { 1.0 };
                self.blend(x, y, color, coverage);
            }
        }
    }

    /// Vertical stroke centered on `x`, spanning `y0..=y1`.
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, width: u32, color: Rgba<u8>) {
        let left = x - (width as i32) / 2;
        self.fill_rect(left, y0, left + width as i32 - 1, y1, color);
    }

    /// Horizontal stroke centered on `y`, spanning `x0..=x1`.
    pub fn hline(&mut self, y: i32, x0: i32, x1: i32, width: u32, color: Rgba<u8>) {
        let top = y - (width as i32) / 2;
        self.fill_rect(x0, top, x1, top + width as i32 - 1, color);
    }

    /// Internal lines of a square grid. Line `i` (1-based, `divisions - 1`
    /// of them per axis) uses the `thick` stroke iff `accent_step` is
    /// non-zero and `i % accent_step == 0`, otherwise `thin`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_grid_lines(
        &mut self,
        left: i32,
        top: i32,
        side: i32,
        divisions: u32,
        thin: (u32, Rgba<u8>),
        thick: (u32, Rgba<u8>),
        accent_step: u32,
    ) {
        let cell = side / divisions as i32;
        for i in 1..divisions {
            let (width, color) = if accent_step > 0 && i % accent_step == 0 {
                thick
            } else {
                thin
            };
            let offset = i as i32 * cell;
            self.vline(left + offset, top, top + side, width, color);
            self.hline(top + offset, left, left + side, width, color);
        }
    }

    /// Draw `text` at the given anchor point. A `None` font means no face
    /// could be resolved on this host; the text layer is skipped and the
    /// render carries on.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: Option<&Font>,
        size: f32,
        color: Rgba<u8>,
        anchor: Anchor,
    ) {
        let Some(font) = font else { return };
        let scale = Scale::uniform(size);
        let metrics = font.v_metrics(scale);
        let glyphs: Vec<_> = font.layout(text, scale, point(0.0, 0.0)).collect();
        let advance = glyphs
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);
        // Baseline origin for the requested anchor.
        let (origin_x, origin_y) = match anchor {
            Anchor::TopLeft => (x as f32, y as f32 + metrics.ascent),
            Anchor::Center => (
                x as f32 - advance / 2.0,
                y as f32 + (metrics.ascent + metrics.descent) / 2.0,
            ),
        };
        let origin_x = origin_x.round() as i32;
        let origin_y = origin_y.round() as i32;
        for glyph in &glyphs {
            if let Some(bounds) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    let px = origin_x + bounds.min.x + gx as i32;
                    let py = origin_y + bounds.min.y + gy as i32;
                    self.blend(px, py, color, coverage);
                });
            }
        }
    }

    /// Encode the canvas as PNG at `path`.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        let encoder =
            PngEncoder::new_with_quality(&mut writer, CompressionType::Best, PngFilterType::Adaptive);
        encoder
            .write_image(
                self.pixels.as_raw(),
                self.width(),
                self.height(),
                ColorType::Rgba8,
            )
            .with_context(|| format!("Failed to encode {}", path.display()))?;
        writer.flush()?;
        Ok(())
    }
}

/// Well-known locations for the faces the assets prefer. The first readable
/// candidate wins.
const BOLD_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
];

const REGULAR_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
];

/// Try `preferred` first, then the fixed candidate list. A missing or
/// unparsable file is not an error; `None` simply disables text drawing for
/// that face.
pub fn resolve_font(preferred: Option<&Path>, candidates: &[&str]) -> Option<Font<'static>> {
    preferred
        .into_iter()
        .map(Path::to_path_buf)
        .chain(candidates.iter().map(|candidate| PathBuf::from(*candidate)))
        .find_map(|path| std::fs::read(path).ok().and_then(Font::try_from_vec))
}

/// The bold/regular pair used across the asset set.
pub struct FontSet {
    pub bold: Option<Font<'static>>,
    pub regular: Option<Font<'static>>,
}

impl FontSet {
    /// Resolve both faces, preferring `bold_path` for the bold face when
    /// given.
    pub fn resolve(bold_path: Option<&Path>) -> Self {
        Self {
            bold: resolve_font(bold_path, BOLD_CANDIDATES),
            regular: resolve_font(None, REGULAR_CANDIDATES),
        }
    }

    /// No faces at all; text layers become no-ops. Used by pixel-exact tests.
    pub fn empty() -> Self {
        Self {
            bold: None,
            regular: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::Gradient;

    #[test]
    fn stroke_width_never_collapses_to_zero() {
        let smallest = Canvas::scaled_to(48, 1024);
        assert_eq!(smallest.stroke(1.0), 1);
        assert_eq!(smallest.stroke(3.0), 1);
        assert_eq!(smallest.stroke(4.0), 1);

        let reference = Canvas::scaled_to(1024, 1024);
        assert_eq!(reference.stroke(3.0), 3);
        assert_eq!(reference.stroke(4.0), 4);
    }

    #[test]
    fn px_scales_linear_measurements() {
        let canvas = Canvas::scaled_to(96, 1024);
        assert_eq!(canvas.px(1024.0), 96);
        assert_eq!(canvas.px(600.0), 56); // 56.25 rounds down
        assert_eq!(canvas.px(480.0), 45);
    }

    #[test]
    fn filled_circle_covers_center_and_spares_corners() {
        let mut canvas = Canvas::new(64, 64);
        canvas.fill_circle(32, 32, 20, Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(32, 32), Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(0, 0)[3], 0);
        assert_eq!(canvas.pixel(32, 10)[3], 0); // two pixels above the rim
    }

    #[test]
    fn rounded_rect_clips_its_corners() {
        let mut canvas = Canvas::new(64, 64);
        canvas.fill_rounded_rect(8, 8, 55, 55, 12, Rgba([0, 255, 0, 255]));
        assert_eq!(canvas.pixel(8, 8)[3], 0); // corner lies outside the arc
        assert_eq!(canvas.pixel(32, 8), Rgba([0, 255, 0, 255])); // edge midpoint
        assert_eq!(canvas.pixel(32, 32), Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn translucent_fills_blend_over_the_background() {
        let mut canvas = Canvas::with_background(8, 8, Rgba([255, 255, 255, 255]));
        canvas.fill_rect(0, 0, 7, 7, Rgba([255, 0, 0, 128]));
        let blended = canvas.pixel(4, 4);
        assert_eq!(blended[0], 255);
        assert!(blended[1] > 115 && blended[1] < 140, "got {:?}", blended);
        assert_eq!(blended[3], 255);
    }

    #[test]
    fn gradient_disc_hits_both_endpoints() {
        let start = Rgba([79, 70, 229, 255]);
        let end = Rgba([37, 99, 235, 255]);
        let gradient = Gradient { start, end };
        let mut canvas = Canvas::new(201, 201);
        canvas.gradient_disc(100, 100, 96, &gradient);
        // Dead center sits on the innermost ring.
        let center = canvas.pixel(100, 100);
        assert!((center[0] as i32 - start[0] as i32).abs() <= 2, "{center:?}");
        // Just inside the rim the color is the outer endpoint.
        let rim = canvas.pixel(100, 100 - 94);
        assert!((rim[0] as i32 - end[0] as i32).abs() <= 2, "{rim:?}");
        assert!((rim[2] as i32 - end[2] as i32).abs() <= 2, "{rim:?}");
        // Outside stays transparent.
        assert_eq!(canvas.pixel(100, 2)[3], 0);
    }

    #[test]
    fn grid_lines_respect_the_accent_step() {
        let mut canvas = Canvas::with_background(100, 100, Rgba([255, 255, 255, 255]));
        let thin = (1, Rgba([10, 10, 10, 255]));
        let thick = (3, Rgba([200, 0, 0, 255]));
        canvas.draw_grid_lines(5, 5, 90, 9, thin, thick, 3);
        let cell = 90 / 9;
        for i in 1..9u32 {
            let x = (5 + i as i32 * cell) as u32;
            let expected = if i % 3 == 0 { thick.1 } else { thin.1 };
            assert_eq!(canvas.pixel(x, 50), expected, "line {i}");
        }
    }

    #[test]
    fn missing_font_makes_text_a_noop() {
        let mut canvas = Canvas::with_background(32, 32, Rgba([0, 0, 0, 255]));
        canvas.draw_text(16, 16, "5", None, 20.0, Rgba([255, 255, 255, 255]), Anchor::Center);
        for y in 0..32 {
            for x in 0..32 {
                assert_eq!(canvas.pixel(x, y), Rgba([0, 0, 0, 255]));
            }
        }
    }

    #[test]
    fn unresolvable_fonts_are_not_an_error() {
        let missing = Path::new("/definitely/not/a/font.ttf");
        // Whatever the host has installed, this must not panic or error.
        let _ = resolve_font(Some(missing), &[]);
        let set = FontSet::resolve(Some(missing));
        let _ = set.bold;
    }
}
