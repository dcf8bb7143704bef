//! Promotional store graphics: the 1024x500 feature banner and the
//! 1080x1920 screenshot templates. Layouts are fixed-size compositions;
//! nothing here rescales.

use crate::canvas::{Anchor, Canvas, FontSet};
use crate::gradient::{palette, Gradient};
use anyhow::{Context, Result};
use image::Rgba;
use std::fs::create_dir_all;
use std::path::Path;

pub const FEATURE_GRAPHIC: (&str, u32, u32) = ("feature_graphic.png", 1024, 500);
pub const SCREENSHOT_SIZE: (u32, u32) = (1080, 1920);

const FEATURE_TITLE: &str = "Sudoku Master";
const FEATURE_SUBTITLE: &str = "经典数独益智游戏";
const FEATURE_POINTS: [&str; 3] = ["✓ 多种难度", "✓ 每日挑战", "✓ 成就系统"];
const FOOTER_CAPTION: &str = "数独大师 - Sudoku Master";

/// Screenshot templates: (filename, title, feature lines).
pub const SCREENSHOTS: [(&str, &str, [&str; 3]); 3] = [
    ("screenshot_home.png", "首页", ["选择难度", "每日挑战", "查看统计"]),
    ("screenshot_game.png", "游戏界面", ["9x9 数独棋盘", "笔记模式", "智能提示"]),
    ("screenshot_complete.png", "完成界面", ["用时统计", "最佳纪录", "新游戏"]),
];

/// Endpoint colors of the banner's vertical background gradient.
#[derive(Debug, Clone, Copy)]
pub struct BannerTheme {
    pub top: Rgba<u8>,
    pub bottom: Rgba<u8>,
}

impl Default for BannerTheme {
    fn default() -> Self {
        Self {
            top: palette::INDIGO_600,
            bottom: palette::BLUE_600,
        }
    }
}

/// The wide banner shown at the top of the store listing.
pub fn render_feature_graphic(theme: &BannerTheme, fonts: &FontSet) -> Canvas {
    let (_, width, height) = FEATURE_GRAPHIC;
    let mut canvas = Canvas::new(width, height);
    canvas.fill_vertical_gradient(&Gradient {
        start: theme.top,
        end: theme.bottom,
    });

    // Soft circles drifting across the banner.
    for i in 0..5i32 {
        let x = 100 + i * 200;
        let y = 100 + (i % 2) * 300;
        let radius = 50 + i * 20;
        canvas.fill_circle(x, y, radius, Rgba([255, 255, 255, 30]));
    }

    // Right-side 3x3 grid decoration, same motif as the icon panel.
    let grid = 200;
    let left = width as i32 - 250;
    let top = (height as i32 - grid) / 2;
    canvas.fill_rect(left, top, left + grid, top + grid, Rgba([255, 255, 255, 230]));
    canvas.stroke_rect(left, top, left + grid, top + grid, 3, palette::INDIGO_600);
    canvas.draw_grid_lines(
        left,
        top,
        grid,
        3,
        (2, palette::INDIGO_600),
        (2, palette::INDIGO_600),
        3,
    );

    canvas.draw_text(
        80,
        180,
        FEATURE_TITLE,
        fonts.bold.as_ref(),
        72.0,
        palette::WHITE,
        Anchor::TopLeft,
    );
    canvas.draw_text(
        80,
        280,
        FEATURE_SUBTITLE,
        fonts.regular.as_ref(),
        36.0,
        Rgba([255, 255, 255, 200]),
        Anchor::TopLeft,
    );
    let mut y = 350;
    for feature in FEATURE_POINTS {
        canvas.draw_text(
            80,
            y,
            feature,
            fonts.regular.as_ref(),
            36.0,
            Rgba([255, 255, 255, 180]),
            Anchor::TopLeft,
        );
        y += 50;
    }

    canvas
}

/// A phone-sized template: header band, rounded content panel, titled
/// feature list and a footer caption.
pub fn render_screenshot(title: &str, features: &[&str], fonts: &FontSet) -> Canvas {
    let (width, height) = SCREENSHOT_SIZE;
    let (w, h) = (width as i32, height as i32);
    let mut canvas = Canvas::with_background(width, height, palette::CREAM);

    canvas.fill_rect(0, 0, w - 1, 80, palette::INDIGO_600);
    canvas.fill_rounded_rect(40, 120, w - 40, h - 200, 20, palette::WHITE);

    canvas.draw_text(
        w / 2,
        200,
        title,
        fonts.bold.as_ref(),
        48.0,
        palette::INDIGO_600,
        Anchor::Center,
    );

    let mut y = 400;
    for feature in features {
        canvas.draw_text(
            100,
            y,
            &format!("• {feature}"),
            fonts.regular.as_ref(),
            36.0,
            palette::GRAY_800,
            Anchor::TopLeft,
        );
        y += 100;
    }

    canvas.draw_text(
        w / 2,
        h - 100,
        FOOTER_CAPTION,
        fonts.regular.as_ref(),
        36.0,
        palette::GRAY_500,
        Anchor::Center,
    );

    canvas
}

/// Render the feature graphic and every screenshot template into `out_dir`.
pub fn generate_promo_assets(out_dir: &Path, theme: &BannerTheme, fonts: &FontSet) -> Result<()> {
    create_dir_all(out_dir).with_context(|| format!("Can't create {}", out_dir.display()))?;

    let (name, width, height) = FEATURE_GRAPHIC;
    println!("Generating feature graphic...");
    render_feature_graphic(theme, fonts).save_png(&out_dir.join(name))?;
    println!("  ✓ Generated {name} ({width}x{height})");

    println!("Generating screenshot templates...");
    let (sw, sh) = SCREENSHOT_SIZE;
    for (filename, title, features) in SCREENSHOTS {
        render_screenshot(title, &features, fonts).save_png(&out_dir.join(filename))?;
        println!("  ✓ Generated {filename} ({sw}x{sh})");
    }

    Ok(())
}
