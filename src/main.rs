#[cfg(feature = "render")]
mod cli {
    use anyhow::Result;
    use clap::Parser;
    use std::path::PathBuf;
    use sudoku_store_assets::{
        canvas::FontSet,
        gradient::{palette, parse_css_color},
        icon::{self, IconTheme},
    };

    #[derive(Debug, Parser)]
    #[clap(
        name = "gen-icons",
        about = "Generate Sudoku Master launcher icons for every Android density"
    )]
    struct Args {
        /// Project directory that receives the asset tree.
        #[clap(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Disc color at the icon's center (CSS color format)
        #[clap(long, value_name = "COLOR", default_value = "#4f46e5")]
        inner_color: String,

        /// Disc color at the icon's rim (CSS color format)
        #[clap(long, value_name = "COLOR", default_value = "#2563eb")]
        outer_color: String,

        /// Preferred bold font for the grid digits; system fonts are tried
        /// when absent
        #[clap(long, value_name = "FILE")]
        font: Option<PathBuf>,
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();

        let theme = IconTheme {
            center: parse_css_color(&args.inner_color, palette::INDIGO_600),
            edge: parse_css_color(&args.outer_color, palette::BLUE_600),
        };
        let fonts = FontSet::resolve(args.font.as_deref());

        icon::generate_launcher_icons(&args.output, &theme, &fonts)?;

        println!("\n✓ All launcher icons generated");
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
