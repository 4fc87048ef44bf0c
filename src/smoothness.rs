//! Curvature-continuous corner geometry.
//!
//! Every rounded corner is walked as three pieces: a cubic lead-in leaving the
//! straight edge, an optional circular arc, and a cubic lead-out joining the
//! next edge. The cubic coefficients depend only on how much of the quarter
//! turn is left to the Bezier transitions, so they are computed once per
//! [`CornerSmoothness`] and shared by all corners.

use crate::corner_size::CornerRadii;
use crate::math_utils::{clamp_or, distance};
use crate::path::Path;
use euclid::default::{Point2D, Vector2D};
use std::f32::consts::{FRAC_PI_2, PI};

/// Inset applied to extension distances so adjacent corners never overlap.
pub const EXTENSION_INSET: f32 = 0.5;

/// How far the default preset carries the curve along each edge, as a multiple of the radius.
pub const DEFAULT_EXTENDED_FRACTION: f32 = 0.75;

/// Circle fraction of the default preset: roughly 16.26 degrees of true arc per corner.
pub fn default_circle_fraction() -> f32 {
    1.0 - 2.0 * 0.6_f32.asin() / FRAC_PI_2
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerSmoothness {
    circle_fraction: f32,
    extended_fraction: f32,
    circle_radians: f32,
    bezier_radians: f32,
    sin: f32,
    cos: f32,
    a: f32,
    d: f32,
    ad: f32,
}

impl CornerSmoothness {
    /// `circle_fraction` is clamped into [0, 1], `extended_fraction` floored at 0.
    pub fn new(circle_fraction: f32, extended_fraction: f32) -> Self {
        let circle_fraction = clamp_or(circle_fraction, 0.0, 1.0);
        let extended_fraction = if extended_fraction.is_finite() { extended_fraction.max(0.0) } else { 0.0 };

        let circle_radians = FRAC_PI_2 * circle_fraction;
        let bezier_radians = (FRAC_PI_2 - circle_radians) / 2.0;

        let sin = bezier_radians.sin();
        let cos = bezier_radians.cos();
        let a = 1.0 - sin / (1.0 + cos);
        let d = 1.5 * sin / (1.0 + cos) / (1.0 + cos);

        Self {
            circle_fraction,
            extended_fraction,
            circle_radians,
            bezier_radians,
            sin,
            cos,
            a,
            d,
            ad: a + d,
        }
    }

    /// Plain circular corners, no edge extension.
    pub fn none() -> Self {
        Self::new(1.0, 0.0)
    }

    pub fn circle_fraction(&self) -> f32 {
        self.circle_fraction
    }

    pub fn extended_fraction(&self) -> f32 {
        self.extended_fraction
    }

    /// Sweep of the true circular arc in each corner.
    pub fn circle_radians(&self) -> f32 {
        self.circle_radians
    }

    /// Angle covered by each of the two Bezier transitions.
    pub fn bezier_radians(&self) -> f32 {
        self.bezier_radians
    }

    /// Bezier handle coefficients `(a, d, a + d)` as fractions of the radius.
    pub fn coefficients(&self) -> (f32, f32, f32) {
        (self.a, self.d, self.ad)
    }

    /// Distance the straight edge stays curved beyond `radius`.
    ///
    /// `half_extent` is half the box side the edge runs along.
    pub fn extension(&self, radius: f32, half_extent: f32) -> f32 {
        let wanted = (radius * self.extended_fraction).min(half_extent - radius);
        (wanted - EXTENSION_INSET).max(0.0)
    }

    /// General G2 outline: corners with nonzero radius are smoothed, the rest stay square.
    pub fn create_rounded_rectangle_path(&self, width: f32, height: f32, radii: CornerRadii) -> Path {
        let corners = CornerSet::new(self, width, height, radii);
        let mut path = Path::new();

        let start = corners.get(Corner::BottomRight).out_point();
        path.move_to(start.x, start.y);

        for corner in Corner::WALK {
            let placed = corners.get(corner);
            let entry = placed.in_point();
            path.line_to(entry.x, entry.y);
            if placed.radius > 0.0 {
                self.emit_corner(&mut path, &placed);
            }
        }

        path.close();
        path
    }

    /// Pill outline for a box whose four radii all equal half the shorter side.
    ///
    /// Each short side becomes one continuous arc flanked by Bezier transitions.
    pub fn create_capsule_path(&self, width: f32, height: f32, radius: f32) -> Path {
        let corners = CornerSet::new(self, width, height, CornerRadii::all(radius));
        let tr = corners.get(Corner::TopRight);
        let tl = corners.get(Corner::TopLeft);
        let bl = corners.get(Corner::BottomLeft);
        let br = corners.get(Corner::BottomRight);
        let mut path = Path::new();

        if width > height {
            self.emit_side_arc(&mut path, &br, true);
            self.emit_lead_out(&mut path, &tr);
            let entry = tl.in_point();
            path.line_to(entry.x, entry.y);
            self.emit_lead_in(&mut path, &tl);
            self.emit_side_arc(&mut path, &tl, false);
            self.emit_lead_out(&mut path, &bl);
            let entry = br.in_point();
            path.line_to(entry.x, entry.y);
            self.emit_lead_in(&mut path, &br);
        } else {
            let start = br.out_point();
            path.move_to(start.x, start.y);
            let entry = tr.in_point();
            path.line_to(entry.x, entry.y);
            self.emit_lead_in(&mut path, &tr);
            self.emit_side_arc(&mut path, &tr, false);
            self.emit_lead_out(&mut path, &tl);
            let entry = bl.in_point();
            path.line_to(entry.x, entry.y);
            self.emit_lead_in(&mut path, &bl);
            self.emit_side_arc(&mut path, &bl, false);
            self.emit_lead_out(&mut path, &br);
        }

        path.close();
        path
    }

    /// Lead-in, arc, lead-out for one corner.
    fn emit_corner(&self, path: &mut Path, placed: &PlacedCorner) {
        self.emit_lead_in(path, placed);
        if self.circle_radians > 0.0 {
            path.arc_to(
                placed.center(),
                placed.radius,
                placed.frame.edge_angle - self.bezier_radians,
                -self.circle_radians,
                false,
            );
        }
        self.emit_lead_out(path, placed);
    }

    fn emit_lead_in(&self, path: &mut Path, placed: &PlacedCorner) {
        let r = placed.radius;
        let c1 = placed.along_in(r * self.ad);
        let c2 = placed.along_in(r * self.a);
        let end = placed.local(r * (1.0 - self.sin), r * (1.0 - self.cos));
        self.emit_transition(path, c1, c2, end);
    }

    fn emit_lead_out(&self, path: &mut Path, placed: &PlacedCorner) {
        let r = placed.radius;
        let c1 = placed.along_out(r * self.a);
        let c2 = placed.along_out(r * self.ad);
        let end = placed.out_point();
        self.emit_transition(path, c1, c2, end);
    }

    /// A zero-angle transition collapses onto the edge and is drawn straight.
    fn emit_transition(&self, path: &mut Path, c1: Point2D<f32>, c2: Point2D<f32>, end: Point2D<f32>) {
        if self.bezier_radians > 0.0 {
            path.cubic_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
        } else if path.current_point().map_or(true, |p| distance(p, end) > 1e-4) {
            path.line_to(end.x, end.y);
        }
    }

    /// One arc covering the whole side that starts at `first`'s corner.
    fn emit_side_arc(&self, path: &mut Path, first: &PlacedCorner, force_move_to: bool) {
        path.arc_to(
            first.center(),
            first.radius,
            first.frame.edge_angle - self.bezier_radians,
            -(self.bezier_radians + self.circle_radians) * 2.0,
            force_move_to,
        );
    }
}

impl Default for CornerSmoothness {
    fn default() -> Self {
        Self::new(default_circle_fraction(), DEFAULT_EXTENDED_FRACTION)
    }
}

/// Physical corner position; walked in this order by every outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const WALK: [Corner; 4] = [Corner::TopRight, Corner::TopLeft, Corner::BottomLeft, Corner::BottomRight];

    /// Orientation of this corner in a `width` x `height` box.
    pub fn frame(self, width: f32, height: f32) -> CornerFrame {
        let (corner, along_in, along_out, edge_angle) = match self {
            Corner::TopRight => ((width, 0.0), (0.0, 1.0), (-1.0, 0.0), 0.0),
            Corner::TopLeft => ((0.0, 0.0), (1.0, 0.0), (0.0, 1.0), -FRAC_PI_2),
            Corner::BottomLeft => ((0.0, height), (0.0, -1.0), (1.0, 0.0), -PI),
            Corner::BottomRight => ((width, height), (-1.0, 0.0), (0.0, -1.0), -3.0 * FRAC_PI_2),
        };
        CornerFrame {
            corner: Point2D::new(corner.0, corner.1),
            along_in: Vector2D::new(along_in.0, along_in.1),
            along_out: Vector2D::new(along_out.0, along_out.1),
            edge_angle,
        }
    }

    /// Whether the edge walked into this corner is vertical.
    fn enters_vertically(self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomLeft)
    }
}

/// Local orientation of one corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerFrame {
    /// Geometric corner of the box
    pub corner: Point2D<f32>,
    /// Unit vector from the corner back along the incoming edge
    pub along_in: Vector2D<f32>,
    /// Unit vector from the corner along the outgoing edge
    pub along_out: Vector2D<f32>,
    /// Angle, seen from the corner circle's center, of the point where the incoming edge touches it
    pub edge_angle: f32,
}

/// A frame with its radius and extension distances resolved.
#[derive(Debug, Clone, Copy)]
struct PlacedCorner {
    frame: CornerFrame,
    radius: f32,
    ext_in: f32,
    ext_out: f32,
}

impl PlacedCorner {
    fn center(&self) -> Point2D<f32> {
        self.local(self.radius, self.radius)
    }

    /// Point `u` along the incoming edge direction and `v` along the outgoing one.
    fn local(&self, u: f32, v: f32) -> Point2D<f32> {
        self.frame.corner + self.frame.along_in * u + self.frame.along_out * v
    }

    fn along_in(&self, t: f32) -> Point2D<f32> {
        self.local(t, 0.0)
    }

    fn along_out(&self, t: f32) -> Point2D<f32> {
        self.local(0.0, t)
    }

    /// Where the straight incoming edge ends.
    fn in_point(&self) -> Point2D<f32> {
        self.along_in(self.radius + self.ext_in)
    }

    /// Where the straight outgoing edge begins.
    fn out_point(&self) -> Point2D<f32> {
        self.along_out(self.radius + self.ext_out)
    }
}

struct CornerSet {
    corners: [PlacedCorner; 4],
}

impl CornerSet {
    fn new(smoothness: &CornerSmoothness, width: f32, height: f32, radii: CornerRadii) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        let place = |corner: Corner, radius: f32| {
            let ext_v = smoothness.extension(radius, half_h);
            let ext_h = smoothness.extension(radius, half_w);
            let (ext_in, ext_out) = if corner.enters_vertically() { (ext_v, ext_h) } else { (ext_h, ext_v) };
            PlacedCorner {
                frame: corner.frame(width, height),
                radius,
                ext_in,
                ext_out,
            }
        };
        Self {
            corners: [
                place(Corner::TopRight, radii.top_right),
                place(Corner::TopLeft, radii.top_left),
                place(Corner::BottomLeft, radii.bottom_left),
                place(Corner::BottomRight, radii.bottom_right),
            ],
        }
    }

    fn get(&self, corner: Corner) -> PlacedCorner {
        let index = match corner {
            Corner::TopRight => 0,
            Corner::TopLeft => 1,
            Corner::BottomLeft => 2,
            Corner::BottomRight => 3,
        };
        self.corners[index]
    }
}
