//! Rounded shape with logical (start/end) corners.

use crate::corner_size::{sanitize_extent, CornerRadii, CornerSize};
use crate::path::Path;
use crate::rect_utils::{rect_path, round_rect_path};
use crate::smoothness::CornerSmoothness;
use serde::{Deserialize, Serialize};

/// Radii closer than this are treated as equal when picking a path strategy.
const RADIUS_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Which construction a given box and radii set ends up using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStrategy {
    Rectangle,
    Capsule,
    Circular,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedCornerShape {
    pub top_start: CornerSize,
    pub top_end: CornerSize,
    pub bottom_end: CornerSize,
    pub bottom_start: CornerSize,
    pub smoothness: CornerSmoothness,
}

impl RoundedCornerShape {
    pub fn new(
        top_start: CornerSize,
        top_end: CornerSize,
        bottom_end: CornerSize,
        bottom_start: CornerSize,
        smoothness: CornerSmoothness,
    ) -> Self {
        Self {
            top_start,
            top_end,
            bottom_end,
            bottom_start,
            smoothness,
        }
    }

    pub fn all(size: CornerSize, smoothness: CornerSmoothness) -> Self {
        Self::new(size, size, size, size, smoothness)
    }

    pub fn all_px(px: f32, smoothness: CornerSmoothness) -> Self {
        Self::all(CornerSize::px(px), smoothness)
    }

    pub fn all_percent(percent: i32, smoothness: CornerSmoothness) -> Self {
        Self::all(CornerSize::percent(percent), smoothness)
    }

    /// Fully rounded short sides.
    pub fn capsule(smoothness: CornerSmoothness) -> Self {
        Self::all_percent(100, smoothness)
    }

    /// Physical radii for a box, clamped to half the shorter side and mapped by direction.
    pub fn resolve_radii(&self, width: f32, height: f32, direction: LayoutDirection) -> CornerRadii {
        let width = sanitize_extent(width);
        let height = sanitize_extent(height);
        let max_radius = width.min(height) / 2.0;

        let ts = self.top_start.to_px(width, height);
        let te = self.top_end.to_px(width, height);
        let be = self.bottom_end.to_px(width, height);
        let bs = self.bottom_start.to_px(width, height);

        let radii = match direction {
            LayoutDirection::Ltr => CornerRadii::new(ts, te, be, bs),
            LayoutDirection::Rtl => CornerRadii::new(te, ts, bs, be),
        };
        radii.clamped(max_radius)
    }

    /// Strategy chosen for a box; see [`RoundedCornerShape::create_path`].
    pub fn strategy(&self, width: f32, height: f32, direction: LayoutDirection) -> PathStrategy {
        let width = sanitize_extent(width);
        let height = sanitize_extent(height);
        let radii = self.resolve_radii(width, height, direction);
        select_strategy(width, height, &radii, &self.smoothness)
    }

    /// Closed outline in local coordinates (origin top-left, y down).
    ///
    /// Never fails: degenerate sizes produce a zero-area rectangle.
    pub fn create_path(&self, width: f32, height: f32, direction: LayoutDirection) -> Path {
        let width = sanitize_extent(width);
        let height = sanitize_extent(height);
        let radii = self.resolve_radii(width, height, direction);
        let strategy = select_strategy(width, height, &radii, &self.smoothness);

        log::trace!("building {width}x{height} outline ({strategy:?}) with radii {radii:?}");

        match strategy {
            PathStrategy::Rectangle => rect_path(width, height),
            PathStrategy::Capsule => self.smoothness.create_capsule_path(width, height, width.min(height) / 2.0),
            PathStrategy::Circular => round_rect_path(width, height, radii),
            PathStrategy::Smooth => self.smoothness.create_rounded_rectangle_path(width, height, radii),
        }
    }
}

fn select_strategy(width: f32, height: f32, radii: &CornerRadii, smoothness: &CornerSmoothness) -> PathStrategy {
    let max_radius = width.min(height) / 2.0;

    if radii.is_zero() {
        return PathStrategy::Rectangle;
    }

    let all_max = radii.all_equal_to(max_radius, RADIUS_TOLERANCE);
    let square = (width - height).abs() <= RADIUS_TOLERANCE;

    // A square with maximal radii is a circle, not a pill
    if all_max && !square {
        return PathStrategy::Capsule;
    }

    if smoothness.circle_fraction() >= 1.0 || (square && all_max) {
        return PathStrategy::Circular;
    }

    PathStrategy::Smooth
}
