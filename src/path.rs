//! Closed outline produced by the shape engine.
//!
//! A [`Path`] is a plain list of drawing commands in local coordinates
//! (origin at the box's top-left, y pointing down). It owns nothing besides
//! the command list, so callers may copy, translate or discard it freely.

use crate::math_utils::{arc_point, arc_to_cubics, cubic_point, distance};
use euclid::default::{Box2D, Point2D, Vector2D};
use std::fmt::Write as _;

/// Gap below which an arc is considered to start at the current point.
const ARC_JOIN_TOLERANCE: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point2D<f32>),
    LineTo(Point2D<f32>),
    CubicTo {
        ctrl1: Point2D<f32>,
        ctrl2: Point2D<f32>,
        to: Point2D<f32>,
    },
    /// Circular arc; angles in radians, `angle` maps to `center + radius * (cos, sin)`.
    ArcTo {
        center: Point2D<f32>,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
    },
    Close,
}

impl PathCommand {
    /// End point of the command, `None` for `Close`.
    pub fn end_point(&self) -> Option<Point2D<f32>> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::ArcTo {
                center,
                radius,
                start_angle,
                sweep_angle,
            } => Some(arc_point(center, radius, start_angle + sweep_angle)),
            PathCommand::Close => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current pen position, i.e. where the next segment starts.
    pub fn current_point(&self) -> Option<Point2D<f32>> {
        let mut current = None;
        let mut subpath_start = None;
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => {
                    subpath_start = Some(*p);
                    current = Some(*p);
                }
                PathCommand::Close => current = subpath_start,
                other => current = other.end_point(),
            }
        }
        current
    }

    /// Start of the first subpath.
    pub fn start_point(&self) -> Option<Point2D<f32>> {
        self.commands.iter().find_map(|cmd| match cmd {
            PathCommand::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(Point2D::new(x, y)));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.ensure_started(Point2D::new(x, y));
        self.commands.push(PathCommand::LineTo(Point2D::new(x, y)));
    }

    pub fn cubic_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.ensure_started(Point2D::new(x, y));
        self.commands.push(PathCommand::CubicTo {
            ctrl1: Point2D::new(x1, y1),
            ctrl2: Point2D::new(x2, y2),
            to: Point2D::new(x, y),
        });
    }

    /// Append a circular arc.
    ///
    /// With `force_move_to` (or on an empty path) the arc opens a new subpath at
    /// its start; otherwise a connecting line is inserted when the current point
    /// is not already on the arc start.
    pub fn arc_to(&mut self, center: Point2D<f32>, radius: f32, start_angle: f32, sweep_angle: f32, force_move_to: bool) {
        let start = arc_point(center, radius, start_angle);
        match self.current_point() {
            Some(current) if !force_move_to => {
                if distance(current, start) > ARC_JOIN_TOLERANCE {
                    self.commands.push(PathCommand::LineTo(start));
                }
            }
            _ => self.commands.push(PathCommand::MoveTo(start)),
        }
        self.commands.push(PathCommand::ArcTo {
            center,
            radius,
            start_angle,
            sweep_angle,
        });
    }

    pub fn close(&mut self) {
        if !self.commands.is_empty() {
            self.commands.push(PathCommand::Close);
        }
    }

    fn ensure_started(&mut self, fallback: Point2D<f32>) {
        if self.commands.is_empty() {
            self.commands.push(PathCommand::MoveTo(fallback));
        }
    }

    /// Shift every point by (dx, dy) in place.
    pub fn offset(&mut self, dx: f32, dy: f32) {
        let by = Vector2D::new(dx, dy);
        self.map_points(|p| p + by);
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Path {
        let mut out = self.clone();
        out.offset(dx, dy);
        out
    }

    /// Mirror across the vertical line `x = width / 2`.
    ///
    /// Mirroring reverses the orientation of the outline.
    pub fn mirrored_horizontally(&self, width: f32) -> Path {
        let mut out = self.clone();
        out.map_points(|p| Point2D::new(width - p.x, p.y));
        for cmd in &mut out.commands {
            if let PathCommand::ArcTo {
                start_angle,
                sweep_angle,
                ..
            } = cmd
            {
                *start_angle = std::f32::consts::PI - *start_angle;
                *sweep_angle = -*sweep_angle;
            }
        }
        out
    }

    fn map_points(&mut self, f: impl Fn(Point2D<f32>) -> Point2D<f32>) {
        for cmd in &mut self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p = f(*p),
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    *ctrl1 = f(*ctrl1);
                    *ctrl2 = f(*ctrl2);
                    *to = f(*to);
                }
                PathCommand::ArcTo { center, .. } => *center = f(*center),
                PathCommand::Close => {}
            }
        }
    }

    /// Sample the outline into points, `steps` samples per curved segment.
    ///
    /// `Close` contributes the subpath start again so the polyline is closed.
    pub fn flatten(&self, steps: usize) -> Vec<Point2D<f32>> {
        let steps = steps.max(1);
        let mut points = Vec::new();
        let mut current = Point2D::zero();
        let mut subpath_start = Point2D::zero();

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    points.push(p);
                    current = p;
                    subpath_start = p;
                }
                PathCommand::LineTo(p) => {
                    points.push(p);
                    current = p;
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    let seg = (current, ctrl1, ctrl2, to);
                    for i in 1..=steps {
                        points.push(cubic_point(seg, i as f32 / steps as f32));
                    }
                    current = to;
                }
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                } => {
                    for i in 0..=steps {
                        let t = i as f32 / steps as f32;
                        points.push(arc_point(center, radius, start_angle + sweep_angle * t));
                    }
                    current = arc_point(center, radius, start_angle + sweep_angle);
                }
                PathCommand::Close => {
                    points.push(subpath_start);
                    current = subpath_start;
                }
            }
        }
        points
    }

    /// Axis-aligned bounds of the sampled outline.
    pub fn bounds(&self) -> Option<Box2D<f32>> {
        let points = self.flatten(16);
        if points.is_empty() {
            None
        } else {
            Some(Box2D::from_points(points))
        }
    }

    /// Shoelace area of the sampled outline; negative for the engine's native orientation.
    pub fn signed_area(&self) -> f32 {
        let points = self.flatten(32);
        points
            .windows(2)
            .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
            .sum::<f32>()
            / 2.0
    }

    /// Lower the path to move/line/cubic/close only, converting arcs to cubics.
    pub fn to_cubics(&self) -> Path {
        let mut out = Path::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                } => {
                    let start = arc_point(center, radius, start_angle);
                    match out.commands.last() {
                        Some(PathCommand::Close) | None => out.commands.push(PathCommand::MoveTo(start)),
                        _ => {}
                    }
                    for (_, c1, c2, to) in arc_to_cubics(center, radius, start_angle, sweep_angle) {
                        out.commands.push(PathCommand::CubicTo { ctrl1: c1, ctrl2: c2, to });
                    }
                }
                other => out.commands.push(other),
            }
        }
        out
    }

    /// SVG path data (`d` attribute), arcs emitted as `A` commands.
    pub fn to_svg_data(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            match *cmd {
                PathCommand::MoveTo(p) => {
                    let _ = write!(d, "M {} {}", fmt_num(p.x), fmt_num(p.y));
                }
                PathCommand::LineTo(p) => {
                    let _ = write!(d, "L {} {}", fmt_num(p.x), fmt_num(p.y));
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    let _ = write!(
                        d,
                        "C {} {}, {} {}, {} {}",
                        fmt_num(ctrl1.x),
                        fmt_num(ctrl1.y),
                        fmt_num(ctrl2.x),
                        fmt_num(ctrl2.y),
                        fmt_num(to.x),
                        fmt_num(to.y)
                    );
                }
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                } => {
                    // Split so no single `A` is ambiguous about which way round it goes
                    let pieces = (sweep_angle.abs() / std::f32::consts::FRAC_PI_2).ceil().max(1.0) as usize;
                    let step = sweep_angle / pieces as f32;
                    let sweep_flag = if sweep_angle > 0.0 { 1 } else { 0 };
                    for i in 1..=pieces {
                        let end = arc_point(center, radius, start_angle + step * i as f32);
                        if i > 1 {
                            d.push(' ');
                        }
                        let _ = write!(
                            d,
                            "A {} {} 0 0 {} {} {}",
                            fmt_num(radius),
                            fmt_num(radius),
                            sweep_flag,
                            fmt_num(end.x),
                            fmt_num(end.y)
                        );
                    }
                }
                PathCommand::Close => d.push('Z'),
            }
        }
        d
    }
}

/// Format a coordinate with at most three decimals and no trailing zeros
fn fmt_num(v: f32) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{rounded:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
