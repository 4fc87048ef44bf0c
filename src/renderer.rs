use crate::color_utils::{baseline_color, opacity, to_hex_rgb};
use crate::models::{ShapeDocument, ViewBox};
use crate::path::Path;
use crate::rect_utils::round_rect_path;
use crate::corner_size::CornerRadii;
use crate::error::G2Result;
use std::fmt::Write as _;

/// Opacity of the baseline overlay so the G2 outline stays visible underneath
pub const BASELINE_OPACITY: f32 = 0.5;

fn fill_attrs(color: palette::Srgba<u8>) -> String {
    let alpha = opacity(color);
    if alpha >= 1.0 {
        format!("fill=\"{}\"", to_hex_rgb(color))
    } else if alpha <= 0.0 {
        "fill=\"none\"".to_string()
    } else {
        format!("fill=\"{}\" fill-opacity=\"{}\"", to_hex_rgb(color), alpha)
    }
}

fn path_element(path: &Path, attrs: &str) -> String {
    format!("  <path d=\"{}\" {} fill-rule=\"nonzero\"/>\n", path.to_svg_data(), attrs)
}

/// Conventional rounded rectangle the G2 outline is compared against
pub fn baseline_path(doc: &ShapeDocument) -> Path {
    let radius = doc.baseline_radius();
    round_rect_path(doc.width(), doc.height(), CornerRadii::all(radius))
}

/// Render a shape document as a standalone SVG document.
///
/// Fails on an unparseable fill or background color.
pub fn generate_svg(doc: &ShapeDocument) -> G2Result<String> {
    let background = doc.background_color()?;
    let fill = doc.fill_color()?;

    let ViewBox {
        min_x,
        min_y,
        width,
        height,
    } = doc.viewbox();

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{min_x} {min_y} {width} {height}\" width=\"{width}\" height=\"{height}\">"
    );

    if background.alpha > 0 {
        let _ = writeln!(
            svg,
            "  <rect x=\"{min_x}\" y=\"{min_y}\" width=\"{width}\" height=\"{height}\" {}/>",
            fill_attrs(background)
        );
    }

    svg.push_str(&path_element(&doc.path(), &fill_attrs(fill)));

    if doc.baseline {
        let attrs = format!("{} fill-opacity=\"{}\"", fill_attrs(baseline_color()), BASELINE_OPACITY);
        svg.push_str(&path_element(&baseline_path(doc), &attrs));
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}
