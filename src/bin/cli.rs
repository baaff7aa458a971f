use clap::Parser;
use clap_num::number_range;
use log::info;
use rand::Rng;
use std::path::PathBuf;

use harmony::*;

fn color_count(s: &str) -> Result<usize, String> {
    number_range(s, 1, MAX_COLORS)
}

fn swatch_dim(s: &str) -> Result<u32, String> {
    number_range(s, 1, 4096)
}

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Base color as six hex digits, with or without a leading '#'.
    #[arg(default_value = "#3B82F6")]
    base: Color,
    /// Harmony rule: monochromatic, analogous, complementary or triadic.
    #[arg(short, long, default_value_t = HarmonyRule::Monochromatic)]
    rule: HarmonyRule,
    /// Number of colors in the palette.
    #[arg(short, long, default_value_t = 5, value_parser = color_count)]
    count: usize,
    /// Draw a random base color instead of using BASE.
    #[arg(long)]
    random: bool,
    /// Draw a random harmony rule instead of using --rule.
    #[arg(long)]
    random_rule: bool,
    /// Read base color, rule and count from a JSON, RON or YAML file.
    ///
    /// Request files go through the lenient generator: an invalid base color
    /// produces black swatches and an unknown rule repeats the base color.
    #[arg(long, conflicts_with_all = ["random", "random_rule"])]
    request: Option<PathBuf>,
    /// Write the palette to a file instead of stdout.
    ///
    /// The format follows the extension: .json, .ron, .yaml, .css, .txt, or
    /// .png/.jpg for a swatch image.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Dimensions (in pixels) of each swatch in an exported image.
    #[arg(short, long, number_of_values = 2, default_values_t = [120, 120], value_parser = swatch_dim)]
    #[arg(value_names = ["WIDTH", "HEIGHT"])]
    swatch: Vec<u32>,
}

impl Cli {
    fn swatch_config(&self) -> SwatchConfig {
        SwatchConfig {
            width: self.swatch[0],
            height: self.swatch[1],
        }
    }

    fn palette(&self) -> Result<Palette, HarmonyError> {
        if let Some(path) = &self.request {
            let request = PaletteRequest::from_file(path)?;
            info!("loaded request {:?} from '{}'", request, path.display());
            return Ok(request.generate());
        }

        let mut rng = rand::rng();
        let base = if self.random { rng.random() } else { self.base };
        let rule = if self.random_rule { rng.random() } else { self.rule };

        if self.random || self.random_rule {
            eprintln!("Base color {}, {} harmony", base, rule);
        }

        Ok(Palette::generate(base, rule, self.count))
    }
}

fn run() -> Result<(), HarmonyError> {
    let cli = Cli::parse();
    let palette = cli.palette()?;

    match &cli.output {
        Some(path) => {
            palette.save(path, cli.swatch_config())?;
            println!("Palette of {} colors written to '{}'", palette.len(), path.display());
        }
        None => {
            for color in &palette {
                println!("{}", color);
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
