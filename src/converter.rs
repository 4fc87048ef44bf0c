use crate::utils::save_png_with_quality;
use anyhow::{Context, Result};
use resvg::usvg::{self, Tree};
use std::path::Path;
use tiny_skia::{Pixmap, Transform};

/// Rasterize an SVG document through resvg at `scale` pixels per unit.
///
/// The background comes from the document itself; uncovered pixels stay transparent.
pub fn rasterize_svg(svg_content: &str, scale: f32) -> Result<Pixmap> {
    let options = usvg::Options::default();
    let tree = Tree::from_str(svg_content, &options).context("Failed to parse generated SVG")?;

    let size = tree.size();
    let width = ((size.width() * scale).ceil() as u32).max(1);
    let height = ((size.height() * scale).ceil() as u32).max(1);

    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| anyhow::anyhow!("Failed to create pixmap"))?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Rasterize an SVG document through resvg and save it as PNG.
///
/// This is the slower path; [`crate::render_to_png`] draws the outline directly.
pub fn convert_svg_to_png(svg_content: &str, output_path: &Path, quality: u8, dpi: Option<u32>) -> Result<()> {
    // Calculate scale factor from DPI (assume source is 96 DPI)
    const SOURCE_DPI: f32 = 96.0;
    let scale = dpi.map(|d| d as f32 / SOURCE_DPI).unwrap_or(1.0);

    let pixmap = rasterize_svg(svg_content, scale)?;
    save_png_with_quality(&pixmap, output_path, quality)?;
    log::info!(
        "rasterized SVG to {} ({}x{} px)",
        output_path.display(),
        pixmap.width(),
        pixmap.height()
    );

    Ok(())
}
