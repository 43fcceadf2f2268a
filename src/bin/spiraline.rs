use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Render a raster image as a single continuous variable-width spiral stroke.
#[derive(Parser, Debug)]
#[command(name = "spiraline", version)]
struct Cli {
    /// Input image (PNG, JPEG, ...).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// JSON parameter file (fields may be partial; flags below override it).
    #[arg(long)]
    params: Option<PathBuf>,

    /// Number of full revolutions (canvas edge still wins).
    #[arg(long)]
    turns: Option<u32>,

    /// Distance in pixels between successive spiral arms.
    #[arg(long)]
    line_spacing: Option<f64>,

    /// Stroke width over pure white.
    #[arg(long)]
    min_width: Option<f64>,

    /// Stroke width over pure black.
    #[arg(long)]
    max_width: Option<f64>,

    /// Tone curve exponent (> 0).
    #[arg(long)]
    gamma: Option<f64>,

    /// Invert luminance before the tone curve.
    #[arg(long)]
    invert: bool,

    /// Disable the circular crop.
    #[arg(long)]
    no_crop: bool,

    /// Output side length in pixels.
    #[arg(long)]
    resolution: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut params = match &cli.params {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read params '{}'", path.display()))?;
            serde_json::from_str(&text).with_context(|| "parse params JSON")?
        }
        None => spiraline::SpiralParams::default(),
    };
    if let Some(v) = cli.turns {
        params.turns = v;
    }
    if let Some(v) = cli.line_spacing {
        params.line_spacing = v;
    }
    if let Some(v) = cli.min_width {
        params.min_width = v;
    }
    if let Some(v) = cli.max_width {
        params.max_width = v;
    }
    if let Some(v) = cli.gamma {
        params.gamma = v;
    }
    if let Some(v) = cli.resolution {
        params.resolution = v;
    }
    if cli.invert {
        params.invert = true;
    }
    if cli.no_crop {
        params.crop_to_circle = false;
    }
    params.validate()?;

    let bytes = std::fs::read(&cli.in_path)
        .with_context(|| format!("read input '{}'", cli.in_path.display()))?;
    let source = spiraline::load_image(&bytes)?;

    let png = spiraline::render_png(&source, &params)?;

    if let Some(parent) = cli.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&cli.out, &png)
        .with_context(|| format!("write png '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}
