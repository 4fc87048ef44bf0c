use std::fmt;

/// Logical corner radius request, resolved against the box at path-building time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CornerSize {
    /// Fixed radius in pixels, never negative
    Absolute(f32),
    /// Percentage (0..=100) of half the shorter side
    Relative(u8),
}

impl CornerSize {
    /// Fixed pixel radius; negative or NaN input becomes 0.
    pub fn px(px: f32) -> Self {
        let px = if px.is_nan() { 0.0 } else { px.max(0.0) };
        CornerSize::Absolute(px)
    }

    /// Proportional radius; the percentage is clamped into 0..=100.
    pub fn percent(percent: i32) -> Self {
        CornerSize::Relative(percent.clamp(0, 100) as u8)
    }

    pub const fn zero() -> Self {
        CornerSize::Absolute(0.0)
    }

    /// Resolve to a radius in pixels for a box of `width` x `height`.
    ///
    /// Relative sizes follow the shorter side, so a 300x150 and a 150x300 box
    /// resolve identically.
    pub fn to_px(&self, width: f32, height: f32) -> f32 {
        match *self {
            // Guard against values built through the variant directly
            CornerSize::Absolute(px) => {
                if px.is_nan() {
                    0.0
                } else {
                    px.max(0.0)
                }
            }
            CornerSize::Relative(percent) => {
                let shorter = sanitize_extent(width).min(sanitize_extent(height));
                (percent.min(100) as f32 / 100.0) * (shorter / 2.0)
            }
        }
    }
}

impl Default for CornerSize {
    fn default() -> Self {
        CornerSize::zero()
    }
}

impl fmt::Display for CornerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CornerSize::Absolute(px) => write!(f, "{px}px"),
            CornerSize::Relative(percent) => write!(f, "{percent}%"),
        }
    }
}

/// Box extents that are negative or not finite count as zero
pub(crate) fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// Resolved physical radii in pixels, clockwise from the top-left.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self::new(r, r, r, r)
    }

    /// Clamp every radius into [0, max].
    pub fn clamped(self, max: f32) -> Self {
        let max = max.max(0.0);
        let c = |r: f32| if r.is_nan() { 0.0 } else { r.clamp(0.0, max) };
        Self::new(c(self.top_left), c(self.top_right), c(self.bottom_right), c(self.bottom_left))
    }

    pub fn is_zero(&self) -> bool {
        self.top_left == 0.0 && self.top_right == 0.0 && self.bottom_right == 0.0 && self.bottom_left == 0.0
    }

    /// True when all four radii are within `tolerance` of `r`.
    pub fn all_equal_to(&self, r: f32, tolerance: f32) -> bool {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
            .iter()
            .all(|v| (v - r).abs() <= tolerance)
    }

    pub fn max_radius(&self) -> f32 {
        self.top_left.max(self.top_right).max(self.bottom_right).max(self.bottom_left)
    }
}
