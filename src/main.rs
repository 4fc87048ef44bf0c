use anyhow::{Context, Result};
use clap::Parser;
use g2corners::color_utils::parse_color;
use g2corners::logging::{init_logging, LoggingConfig};
use g2corners::models::{CornerSizeSpec, CornersSpec};
use g2corners::{convert_svg_to_png, generate_svg, render_to_png, LayoutDirection, PreviewState, ShapeDocument};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "g2corners")]
#[command(about = "Render rectangles with curvature-continuous rounded corners to PNG or SVG", long_about = None)]
struct Args {
    /// Shape document (JSON); when given, the shape flags below are ignored
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output file path; .svg exports SVG, anything else PNG
    /// (defaults to the config filename with .png, or shape.png)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Box width in pixels
    #[arg(long, default_value_t = 240.0)]
    width: f32,

    /// Box height in pixels (defaults to width / aspect)
    #[arg(long)]
    height: Option<f32>,

    /// Width / height ratio used when --height is not given
    #[arg(long, default_value_t = 1.0)]
    aspect: f32,

    /// Corner radius in dp
    #[arg(long, conflicts_with = "percent")]
    radius: Option<f32>,

    /// Corner radius as a percentage of half the shorter side
    #[arg(long)]
    percent: Option<i32>,

    /// Share of each corner covered by a true circular arc (0..1)
    #[arg(long)]
    circle_fraction: Option<f32>,

    /// How far the curve reaches along the edges, relative to the radius
    #[arg(long)]
    extended_fraction: Option<f32>,

    /// Pixels per dp
    #[arg(long, default_value_t = 1.0)]
    density: f32,

    /// Right-to-left layout (start corners on the right)
    #[arg(long)]
    rtl: bool,

    /// Overlay the conventional rounded rectangle in red
    #[arg(long)]
    baseline: bool,

    /// Fill color (#RRGGBB or #RRGGBBAA)
    #[arg(long)]
    fill: Option<String>,

    /// Background color (#RRGGBB, #RRGGBBAA or "transparent")
    #[arg(long)]
    background: Option<String>,

    /// PNG compression quality (0-100)
    #[arg(long, default_value_t = 75, value_parser = clap::value_parser!(u8).range(0..=100))]
    quality: u8,

    /// Output DPI (source units are 96 DPI)
    #[arg(long)]
    dpi: Option<u32>,

    /// Rasterize through resvg from the generated SVG instead of drawing directly
    #[arg(long)]
    legacy: bool,

    /// Print the outline's SVG path data to stdout
    #[arg(long)]
    print_path: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Build a document from the command-line knobs through the preview state.
fn document_from_args(args: &Args) -> ShapeDocument {
    let mut state = PreviewState::new();
    state.set_density(args.density);
    state.set_aspect_ratio(args.aspect);
    if let Some(v) = args.circle_fraction {
        state.set_circle_fraction(v);
    }
    if let Some(v) = args.extended_fraction {
        state.set_extended_fraction(v);
    }
    if let Some(v) = args.radius {
        state.set_radius_dp(v);
    }
    if args.rtl {
        state.set_direction(LayoutDirection::Rtl);
    }
    state.set_baseline_visible(args.baseline);
    log::debug!("preview state: {}", state.describe());

    let mut doc = state.to_document(args.width);
    if let Some(height) = args.height {
        doc.height = height.max(0.0);
    }
    if let Some(percent) = args.percent {
        doc.corners = CornersSpec {
            all: Some(CornerSizeSpec::Percent(percent)),
            ..CornersSpec::default()
        };
    }
    doc
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::from_verbosity(args.verbose));

    let mut doc = match &args.config {
        Some(path) => ShapeDocument::from_path(path)
            .with_context(|| format!("Failed to load shape document: {}", path.display()))?,
        None => document_from_args(&args),
    };
    if let Some(fill) = &args.fill {
        parse_color(fill).context("Invalid --fill")?;
        doc.fill = fill.clone();
    }
    if let Some(background) = &args.background {
        parse_color(background).context("Invalid --background")?;
        doc.background = background.clone();
    }

    if args.print_path {
        println!("{}", doc.path().to_svg_data());
    }

    // Determine output path
    let output_path = args.output.clone().unwrap_or_else(|| match &args.config {
        Some(config) => config.with_extension("png"),
        None => PathBuf::from("shape.png"),
    });

    let extension = output_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png")
        .to_lowercase();

    match extension.as_str() {
        "svg" => {
            let svg_content = generate_svg(&doc).context("Failed to generate SVG")?;
            fs::write(&output_path, svg_content)
                .with_context(|| format!("Failed to write SVG file: {}", output_path.display()))?;
        }
        _ if args.legacy => {
            let svg_content = generate_svg(&doc).context("Failed to generate SVG")?;
            convert_svg_to_png(&svg_content, &output_path, args.quality, args.dpi)
                .with_context(|| format!("Failed to convert to PNG: {}", output_path.display()))?;
        }
        _ => {
            render_to_png(&doc, &output_path, args.quality, args.dpi)
                .with_context(|| format!("Failed to render PNG: {}", output_path.display()))?;
        }
    }

    log::info!("wrote {}", output_path.display());
    Ok(())
}
