use crate::color_utils::{baseline_color, to_skia_color};
use crate::error::G2Error;
use crate::models::ShapeDocument;
use crate::path::{Path, PathCommand};
use crate::renderer::{baseline_path, BASELINE_OPACITY};
use crate::utils::save_png_with_quality;
use anyhow::Result;
use palette::Srgba;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};

/// Lower an outline to a tiny-skia path; arcs become cubics.
/// Returns `None` for paths tiny-skia rejects (empty or zero-area bounds).
pub fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for cmd in path.to_cubics().commands() {
        match *cmd {
            PathCommand::MoveTo(p) => pb.move_to(p.x, p.y),
            PathCommand::LineTo(p) => pb.line_to(p.x, p.y),
            PathCommand::CubicTo { ctrl1, ctrl2, to } => pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y),
            PathCommand::Close => pb.close(),
            // `to_cubics` leaves no arcs behind
            PathCommand::ArcTo { .. } => {}
        }
    }
    pb.finish()
}

fn fill(pixmap: &mut Pixmap, path: &Path, color: Srgba<u8>, transform: Transform) {
    let Some(skia_path) = to_skia_path(path) else {
        log::debug!("skipping empty outline");
        return;
    };
    let mut paint = Paint::default();
    paint.set_color(to_skia_color(color));
    paint.anti_alias = true;
    pixmap.fill_path(&skia_path, &paint, FillRule::Winding, transform, None);
}

/// Rasterize a document at `scale` pixels per unit.
pub fn render_pixmap(doc: &ShapeDocument, scale: f32) -> Result<Pixmap> {
    let viewbox = doc.viewbox();
    let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };

    let width = (viewbox.width * scale).ceil().max(1.0) as u32;
    let height = (viewbox.height * scale).ceil().max(1.0) as u32;
    let mut pixmap = Pixmap::new(width, height).ok_or(G2Error::Pixmap { width, height })?;

    let background = doc.background_color()?;
    if background.alpha > 0 {
        let mut background_paint = Paint::default();
        background_paint.set_color(to_skia_color(background));
        if let Some(rect) = Rect::from_xywh(0.0, 0.0, width as f32, height as f32) {
            pixmap.fill_rect(rect, &background_paint, Transform::identity(), None);
        }
    }

    // Local shape coordinates -> pixmap: shift past the padding, then scale
    let transform = Transform::from_scale(scale, scale).pre_translate(-viewbox.min_x, -viewbox.min_y);

    fill(&mut pixmap, &doc.path(), doc.fill_color()?, transform);

    if doc.baseline {
        let mut overlay = baseline_color();
        overlay.alpha = (255.0 * BASELINE_OPACITY).round() as u8;
        fill(&mut pixmap, &baseline_path(doc), overlay, transform);
    }

    Ok(pixmap)
}

/// Render a document straight to a PNG file.
pub fn render_to_png(doc: &ShapeDocument, output_path: &std::path::Path, quality: u8, dpi: Option<u32>) -> Result<()> {
    // Source units are treated as 96 DPI pixels
    const SOURCE_DPI: f32 = 96.0;
    let scale = dpi.map(|d| d as f32 / SOURCE_DPI).unwrap_or(1.0);

    let pixmap = render_pixmap(doc, scale)?;
    save_png_with_quality(&pixmap, output_path, quality)?;

    log::info!(
        "rendered {}x{} shape to {} ({}x{} px)",
        doc.width(),
        doc.height(),
        output_path.display(),
        pixmap.width(),
        pixmap.height()
    );
    Ok(())
}
