#[cfg(feature = "render")]
mod cli {
    use anyhow::Result;
    use clap::Parser;
    use std::path::PathBuf;
    use sudoku_store_assets::{
        canvas::FontSet,
        gradient::{palette, parse_css_color},
        promo::{self, BannerTheme},
    };

    #[derive(Debug, Parser)]
    #[clap(
        name = "gen-graphics",
        about = "Generate Sudoku Master's feature graphic and screenshot templates"
    )]
    struct Args {
        /// Project directory that receives the promotional assets.
        #[clap(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Banner gradient color at the top edge (CSS color format)
        #[clap(long, value_name = "COLOR", default_value = "#4f46e5")]
        top_color: String,

        /// Banner gradient color at the bottom edge (CSS color format)
        #[clap(long, value_name = "COLOR", default_value = "#2563eb")]
        bottom_color: String,

        /// Preferred bold font for titles; system fonts are tried when absent
        #[clap(long, value_name = "FILE")]
        font: Option<PathBuf>,
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();

        let theme = BannerTheme {
            top: parse_css_color(&args.top_color, palette::INDIGO_600),
            bottom: parse_css_color(&args.bottom_color, palette::BLUE_600),
        };
        let fonts = FontSet::resolve(args.font.as_deref());

        promo::generate_promo_assets(&args.output, &theme, &fonts)?;

        println!("\n✓ All promotional assets generated");
        println!("  Output directory: {}", args.output.display());
        Ok(())
    }
}

#[cfg(feature = "render")]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(not(feature = "render"))]
fn main() {
    eprintln!("error: {}", sudoku_store_assets::MISSING_RENDER_HINT);
    std::process::exit(1);
}
