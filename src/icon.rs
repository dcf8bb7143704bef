//! The launcher icon: a radial gradient disc carrying a rounded 9x9 sudoku
//! panel, rendered from a declarative layout at any requested pixel size.
//!
//! The layout is authored against a 1024-pixel reference; every linear
//! measurement goes through the canvas scale helpers, so the same tables
//! drive everything from the 48 px mdpi launcher up to the 1024 px store
//! source file.

use crate::canvas::{Anchor, Canvas, FontSet};
use crate::gradient::{palette, Gradient};
use anyhow::{Context, Result};
use image::Rgba;
use std::fs::create_dir_all;
use std::path::Path;

/// The size all layout tables are authored against.
pub const REFERENCE_SIZE: u32 = 1024;

/// Android density tiers and their launcher icon sizes.
pub const DENSITIES: [(&str, u32); 5] = [
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

/// Store-listing artifacts written next to the density tree.
pub const STORE_ICONS: [(&str, u32); 2] =
    [("play_store_icon.png", 512), ("icon_source_1024.png", 1024)];

const BORDER_RING: Rgba<u8> = Rgba([255, 255, 255, 51]);
const PANEL_FILL: Rgba<u8> = Rgba([255, 255, 255, 242]);

/// Sample digits scattered over the panel: (column, row, digit, color).
const DIGITS: [(i32, i32, &str, Rgba<u8>); 15] = [
    (0, 0, "5", palette::INDIGO_600),
    (1, 0, "3", palette::VIOLET_600),
    (5, 1, "7", palette::BLUE_600),
    (0, 2, "6", palette::RED_600),
    (1, 2, "1", palette::INDIGO_600),
    (2, 2, "9", palette::VIOLET_600),
    (5, 2, "5", palette::BLUE_600),
    (1, 3, "8", palette::GRAY_400),
    (4, 3, "6", palette::INDIGO_600),
    (5, 3, "3", palette::RED_600),
    (0, 4, "4", palette::BLUE_600),
    (4, 4, "8", palette::VIOLET_600),
    (5, 4, "5", palette::GRAY_400),
    (1, 5, "7", palette::VIOLET_600),
    (3, 5, "9", palette::RED_600),
];

/// Accent dots at the panel's inner corners, already translucent.
const CORNER_DOTS: [Rgba<u8>; 4] = [
    Rgba([79, 70, 229, 77]),
    Rgba([124, 58, 237, 77]),
    Rgba([37, 99, 235, 77]),
    Rgba([79, 70, 229, 77]),
];

/// Endpoint colors of the icon's background disc.
#[derive(Debug, Clone, Copy)]
pub struct IconTheme {
    /// Disc color at the center.
    pub center: Rgba<u8>,
    /// Disc color at the rim.
    pub edge: Rgba<u8>,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            center: palette::INDIGO_600,
            edge: palette::BLUE_600,
        }
    }
}

/// Render the launcher icon at `size` pixels.
pub fn render_launcher_icon(size: u32, theme: &IconTheme, fonts: &FontSet) -> Canvas {
    let mut canvas = Canvas::scaled_to(size, REFERENCE_SIZE);
    let center = (size / 2) as i32;

    let disc = Gradient {
        start: theme.center,
        end: theme.edge,
    };
    canvas.gradient_disc(center, center, canvas.px(480.0), &disc);
    canvas.stroke_circle(center, center, canvas.px(440.0), canvas.stroke(4.0), BORDER_RING);

    let panel = canvas.px(600.0);
    let left = (size as i32 - panel) / 2;
    let top = (size as i32 - panel) / 2;
    canvas.fill_rounded_rect(
        left,
        top,
        left + panel,
        top + panel,
        canvas.px(24.0),
        PANEL_FILL,
    );

    canvas.draw_grid_lines(
        left,
        top,
        panel,
        9,
        (canvas.stroke(1.0), palette::INDIGO_200),
        (canvas.stroke(3.0), palette::INDIGO_600),
        3,
    );

    let cell = panel / 9;
    let digit_size = 56.0 * canvas.scale();
    for (column, row, digit, color) in DIGITS {
        let x = left + column * cell + cell / 2;
        let y = top + row * cell + cell / 2;
        canvas.draw_text(x, y, digit, fonts.bold.as_ref(), digit_size, color, Anchor::Center);
    }

    let inset = canvas.px(20.0);
    let dot_radius = canvas.px(12.0);
    let corners = [
        (left + inset, top + inset),
        (left + panel - inset, top + inset),
        (left + inset, top + panel - inset),
        (left + panel - inset, top + panel - inset),
    ];
    for ((x, y), color) in corners.into_iter().zip(CORNER_DOTS) {
        canvas.fill_circle(x, y, dot_radius, color);
    }

    canvas
}

/// Render the density sweep plus the two store icons under `out_dir`.
///
/// Each density gets one render written twice: `ic_launcher.png` and its
/// `_round` sibling are the same art under the platform's two names.
pub fn generate_launcher_icons(out_dir: &Path, theme: &IconTheme, fonts: &FontSet) -> Result<()> {
    let res_dir = out_dir.join("android/app/src/main/res");

    println!("Generating launcher icons...");
    for (density, size) in DENSITIES {
        let mipmap_dir = res_dir.join(format!("mipmap-{density}"));
        create_dir_all(&mipmap_dir)
            .with_context(|| format!("Can't create {}", mipmap_dir.display()))?;

        let icon = render_launcher_icon(size, theme, fonts);
        for name in ["ic_launcher.png", "ic_launcher_round.png"] {
            icon.save_png(&mipmap_dir.join(name))?;
            println!("  ✓ Generated mipmap-{density}/{name} ({size}x{size})");
        }
    }

    println!("Generating store icons...");
    create_dir_all(out_dir).with_context(|| format!("Can't create {}", out_dir.display()))?;
    for (name, size) in STORE_ICONS {
        let icon = render_launcher_icon(size, theme, fonts);
        icon.save_png(&out_dir.join(name))?;
        println!("  ✓ Generated {name} ({size}x{size})");
    }

    Ok(())
}
