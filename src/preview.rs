//! Interactive preview state: the knobs a host UI exposes, kept as plain data.
//!
//! Display units are density-independent (dp); conversion to pixels happens
//! only when a shape is built, so a host can change density without touching
//! the stored values.

use crate::color_utils::DEFAULT_FILL;
use crate::models::{CornerSizeSpec, CornersSpec, ShapeDocument, SmoothnessSpec, DEFAULT_BACKGROUND, DEFAULT_PADDING};
use crate::shape::{LayoutDirection, RoundedCornerShape};
use crate::smoothness::{default_circle_fraction, CornerSmoothness, DEFAULT_EXTENDED_FRACTION};

pub const DEFAULT_RADIUS_DP: f32 = 120.0;
pub const DEFAULT_ASPECT_RATIO: f32 = 1.0;
const MIN_ASPECT_RATIO: f32 = 0.01;
/// Changes smaller than this are not considered a change
const CHANGE_EPSILON: f32 = 1e-6;

/// Range and step of one slider control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    pub fn snap(&self, v: f32) -> f32 {
        snap(v, self.min, self.max, self.step)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    CircleFraction,
    RadiusDp,
    ExtendedFraction,
    AspectRatio,
}

impl Slider {
    pub fn range(self) -> SliderRange {
        match self {
            Slider::CircleFraction => SliderRange::new(0.0, 1.0, 0.01),
            Slider::RadiusDp => SliderRange::new(0.0, 170.0, 1.0),
            Slider::ExtendedFraction => SliderRange::new(0.0, 2.0, 0.01),
            Slider::AspectRatio => SliderRange::new(1.0, 2.0, 0.01),
        }
    }
}

/// Round `v` onto the `step` grid starting at `min`, then clamp into [min, max].
pub fn snap(v: f32, min: f32, max: f32, step: f32) -> f32 {
    if step <= 0.0 {
        return v.max(min).min(max);
    }
    let snapped = ((v - min) / step).round() * step + min;
    // Drop float noise such as 0.30000001
    let snapped = ((snapped as f64 * 1_000_000.0).round() / 1_000_000.0) as f32;
    snapped.max(min).min(max)
}

/// Box of `available_width` whose height follows `aspect` (width / height).
pub fn aspect_box(available_width: f32, aspect: f32) -> (f32, f32) {
    let width = available_width.max(0.0);
    let aspect = if aspect.is_finite() { aspect.max(0.1) } else { 1.0 };
    (width, (width / aspect).floor())
}

/// Side of a square taking `side_fraction` of the parent height without exceeding its width.
pub fn square_side(parent_width: f32, parent_height: f32, side_fraction: f32) -> f32 {
    let fraction = if side_fraction <= 0.0 || side_fraction.is_nan() {
        0.01
    } else {
        side_fraction.min(1.0)
    };
    (parent_height.max(0.0) * fraction).floor().min(parent_width.max(0.0))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewState {
    circle_fraction: f32,
    extended_fraction: f32,
    radius_dp: f32,
    aspect_ratio: f32,
    density: f32,
    show_baseline: bool,
    direction: LayoutDirection,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            circle_fraction: default_circle_fraction(),
            extended_fraction: DEFAULT_EXTENDED_FRACTION,
            radius_dp: DEFAULT_RADIUS_DP,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            density: 1.0,
            show_baseline: false,
            direction: LayoutDirection::Ltr,
        }
    }
}

fn differs(old: f32, new: f32) -> bool {
    (old - new).abs() > CHANGE_EPSILON
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circle_fraction(&self) -> f32 {
        self.circle_fraction
    }

    pub fn extended_fraction(&self) -> f32 {
        self.extended_fraction
    }

    pub fn radius_dp(&self) -> f32 {
        self.radius_dp
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    pub fn is_baseline_visible(&self) -> bool {
        self.show_baseline
    }

    /// Returns whether the stored value changed.
    pub fn set_circle_fraction(&mut self, v: f32) -> bool {
        let v = crate::math_utils::clamp_or(v, 0.0, 1.0);
        let changed = differs(self.circle_fraction, v);
        if changed {
            self.circle_fraction = v;
        }
        changed
    }

    pub fn set_extended_fraction(&mut self, v: f32) -> bool {
        let v = if v.is_finite() { v.max(0.0) } else { 0.0 };
        let changed = differs(self.extended_fraction, v);
        if changed {
            self.extended_fraction = v;
        }
        changed
    }

    pub fn set_radius_dp(&mut self, dp: f32) -> bool {
        let dp = if dp.is_finite() { dp.max(0.0) } else { 0.0 };
        let changed = differs(self.radius_dp, dp);
        if changed {
            self.radius_dp = dp;
        }
        changed
    }

    pub fn set_aspect_ratio(&mut self, ratio: f32) -> bool {
        let ratio = if ratio.is_finite() { ratio.max(MIN_ASPECT_RATIO) } else { DEFAULT_ASPECT_RATIO };
        let changed = differs(self.aspect_ratio, ratio);
        if changed {
            self.aspect_ratio = ratio;
        }
        changed
    }

    /// Pixels per dp; non-positive values fall back to 1.
    pub fn set_density(&mut self, density: f32) -> bool {
        let density = if density.is_finite() && density > 0.0 { density } else { 1.0 };
        let changed = differs(self.density, density);
        if changed {
            self.density = density;
        }
        changed
    }

    /// Set all four knobs at once; true if any of them changed.
    pub fn set_params(&mut self, circle_fraction: f32, radius_dp: f32, extended_fraction: f32, aspect_ratio: f32) -> bool {
        let a = self.set_circle_fraction(circle_fraction);
        let b = self.set_radius_dp(radius_dp);
        let c = self.set_extended_fraction(extended_fraction);
        let d = self.set_aspect_ratio(aspect_ratio);
        a || b || c || d
    }

    /// Snap a raw slider value onto its grid and apply it.
    pub fn apply_slider(&mut self, slider: Slider, raw: f32) -> bool {
        let v = slider.range().snap(raw);
        match slider {
            Slider::CircleFraction => self.set_circle_fraction(v),
            Slider::RadiusDp => self.set_radius_dp(v),
            Slider::ExtendedFraction => self.set_extended_fraction(v),
            Slider::AspectRatio => self.set_aspect_ratio(v),
        }
    }

    pub fn set_direction(&mut self, direction: LayoutDirection) -> bool {
        let changed = self.direction != direction;
        self.direction = direction;
        changed
    }

    pub fn set_baseline_visible(&mut self, visible: bool) {
        self.show_baseline = visible;
    }

    pub fn toggle_baseline(&mut self) -> bool {
        self.show_baseline = !self.show_baseline;
        self.show_baseline
    }

    /// Back to the default knobs; density, direction and baseline visibility are kept.
    pub fn reset_defaults(&mut self) {
        let defaults = Self::default();
        self.circle_fraction = defaults.circle_fraction;
        self.extended_fraction = defaults.extended_fraction;
        self.radius_dp = defaults.radius_dp;
        self.aspect_ratio = defaults.aspect_ratio;
    }

    pub fn smoothness(&self) -> CornerSmoothness {
        CornerSmoothness::new(self.circle_fraction, self.extended_fraction)
    }

    pub fn radius_px(&self) -> f32 {
        self.radius_dp * self.density
    }

    pub fn shape(&self) -> RoundedCornerShape {
        RoundedCornerShape::all_px(self.radius_px(), self.smoothness())
    }

    /// Box the preview occupies inside `available_width` pixels.
    pub fn preview_size(&self, available_width: f32) -> (f32, f32) {
        aspect_box(available_width, self.aspect_ratio)
    }

    /// Document for the renderers, sized to `available_width` pixels.
    pub fn to_document(&self, available_width: f32) -> ShapeDocument {
        let (width, height) = self.preview_size(available_width);
        ShapeDocument {
            width,
            height,
            corners: CornersSpec {
                all: Some(CornerSizeSpec::Px(self.radius_px())),
                ..CornersSpec::default()
            },
            smoothness: SmoothnessSpec {
                circle_fraction: self.circle_fraction,
                extended_fraction: self.extended_fraction,
            },
            direction: self.direction,
            fill: DEFAULT_FILL.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            baseline: self.show_baseline,
            padding: DEFAULT_PADDING,
        }
    }

    /// One-line summary in the style of the slider captions.
    pub fn describe(&self) -> String {
        format!(
            "circle_fraction={:.2} radius={:.0}dp extended_fraction={:.2} aspect_ratio={:.2}",
            self.circle_fraction, self.radius_dp, self.extended_fraction, self.aspect_ratio
        )
    }
}
