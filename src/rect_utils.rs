use crate::corner_size::CornerRadii;
use crate::path::Path;
use euclid::default::Point2D;
use std::f32::consts::{FRAC_PI_2, PI};

/// Plain rectangle, starting at the top-right corner.
///
/// Walks the same way round as the smoothed outlines: top edge leftward first.
pub fn rect_path(width: f32, height: f32) -> Path {
    let mut p = Path::new();
    p.move_to(width, 0.0);
    p.line_to(0.0, 0.0);
    p.line_to(0.0, height);
    p.line_to(width, height);
    p.close();
    p
}

/// Conventional rounded rectangle: each corner is a plain quarter circle.
///
/// Zero radii leave a square corner. Radii are expected to be clamped to half
/// the shorter side already.
pub fn round_rect_path(width: f32, height: f32, radii: CornerRadii) -> Path {
    let CornerRadii {
        top_left: tl,
        top_right: tr,
        bottom_right: br,
        bottom_left: bl,
    } = radii;

    let mut p = Path::new();
    p.move_to(width, height - br);
    p.line_to(width, tr);
    if tr > 0.0 {
        p.arc_to(Point2D::new(width - tr, tr), tr, 0.0, -FRAC_PI_2, false);
    }
    p.line_to(tl, 0.0);
    if tl > 0.0 {
        p.arc_to(Point2D::new(tl, tl), tl, -FRAC_PI_2, -FRAC_PI_2, false);
    }
    p.line_to(0.0, height - bl);
    if bl > 0.0 {
        p.arc_to(Point2D::new(bl, height - bl), bl, -PI, -FRAC_PI_2, false);
    }
    p.line_to(width - br, height);
    if br > 0.0 {
        p.arc_to(Point2D::new(width - br, height - br), br, FRAC_PI_2, -FRAC_PI_2, false);
    }
    p.close();
    p
}
